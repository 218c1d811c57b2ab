use crate::{
    ast::{
        declarations::{ClassDecl, Decl, ErrorDecl, FunDecl, Function, VarDecl},
        expressions::Expr,
        statements::{
            BlockStmt, ExprStmt, ForInit, ForStmt, IfStmt, PrintStmt, ReturnStmt, Stmt, WhileStmt,
        },
        Ident,
    },
    errors::errors::{Error, ErrorImpl, ExpectedTokens},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_grouping_expr},
        lookups::BindingPower,
    },
    Span,
};

use super::parser::Parser;

/// Parses one declaration: `class`, `fun` and `var` dispatch through the
/// lookup table, anything else is a statement.
pub fn parse_decl(parser: &mut Parser) -> Result<Decl, Error> {
    if let Some(decl_fn) = parser
        .get_decl_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return decl_fn(parser);
    }

    Ok(Decl::Stmt(parse_stmt(parser)?))
}

/// Parses one statement, dispatching on the leading token. Anything that
/// does not start a known statement form is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenCurly => Ok(Stmt::Block(parse_block_raw(parser)?)),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        _ => Ok(Stmt::Expr(parse_expr_stmt(parser)?)),
    }
}

pub fn parse_class_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start;

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = Ident {
        name: name_token.value,
        span: name_token.span,
    };

    let base = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        let base_token = parser.expect(TokenKind::Identifier)?;
        Some(Ident {
            name: base_token.value,
            span: base_token.span,
        })
    } else {
        None
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut methods = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        methods.push(parse_function(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly)?;

    Ok(Decl::Class(ClassDecl {
        name,
        base,
        methods,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

pub fn parse_fun_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start;

    let function = parse_function(parser)?;
    let span = Span {
        start,
        end: function.span.end,
    };

    Ok(Decl::Fun(FunDecl { function, span }))
}

/// Parses a function definition: name, parameter list, block body.
///
/// Used for both `fun` declarations and class methods. The body is always
/// a block, never a single statement.
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        let param = parser.expect(TokenKind::Identifier)?;
        params.push(Ident {
            name: param.value,
            span: param.span,
        });

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            // No trailing comma: a parameter must follow every `,`.
            let param = parser.expect(TokenKind::Identifier)?;
            params.push(Ident {
                name: param.value,
                span: param.span,
            });
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_raw(parser)?;
    let span = Span {
        start: name_token.span.start,
        end: body.span.end,
    };

    Ok(Function {
        name: Ident {
            name: name_token.value,
            span: name_token.span,
        },
        params,
        body,
        span,
    })
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<Decl, Error> {
    Ok(Decl::Var(parse_var_decl_raw(parser)?))
}

/// `var` IDENTIFIER ( `=` expression )? `;` — also used for `for`
/// initializers, where the declaration keeps its own `;`.
pub fn parse_var_decl_raw(parser: &mut Parser) -> Result<VarDecl, Error> {
    let start = parser.advance().span.start;

    let name_token = parser.expect(TokenKind::Identifier)?;

    let init = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(VarDecl {
        name: Ident {
            name: name_token.value,
            span: name_token.span,
        },
        init,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    })
}

/// `{` declaration* `}`, recovering inside the block: a bad declaration is
/// recorded, replaced with an error placeholder, and parsing resumes at the
/// next statement boundary, so one bad line does not take the whole block
/// down.
pub fn parse_block_raw(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        match parse_decl(parser) {
            Ok(decl) => body.push(decl),
            Err(error) => {
                let start = parser.current_token().span.start;
                parser.record(error);
                parser.synchronize();
                let end = parser.current_token().span.start;
                body.push(Decl::Error(ErrorDecl {
                    span: Span { start, end },
                }));
            }
        }
    }

    let close = parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    })
}

pub fn parse_expr_stmt(parser: &mut Parser) -> Result<ExprStmt, Error> {
    let value = parse_expr(parser, BindingPower::Default)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(ExprStmt {
        span: Span {
            start: value.span().start,
            end: semicolon.span.end,
        },
        value,
    })
}

/// An `if`/`while` condition must be syntactically parenthesized; a bare
/// expression is rejected at the token where the `(` was expected.
fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::OpenParen {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: ExpectedTokens::from(TokenKind::OpenParen),
                found: token.value.clone(),
            },
            token.span.start,
        ));
    }

    parse_grouping_expr(parser)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let cond = parse_condition(parser)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    let end = match &else_body {
        Some(else_body) => else_body.span().end,
        None => then_body.span().end,
    };

    Ok(Stmt::If(Box::new(IfStmt {
        cond,
        then_body,
        else_body,
        span: Span { start, end },
    })))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let cond = parse_condition(parser)?;
    let body = parse_stmt(parser)?;
    let end = body.span().end;

    Ok(Stmt::While(Box::new(WhileStmt {
        cond,
        body,
        span: Span { start, end },
    })))
}

/// `for` `(` ( varDecl | exprStmt | `;` ) expression? `;` expression? `)`
/// statement — kept as a distinct node, not desugared to `while`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        TokenKind::Var => Some(ForInit::Var(parse_var_decl_raw(parser)?)),
        _ => Some(ForInit::Expr(parse_expr_stmt(parser)?)),
    };

    let cond = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let incr = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;
    let end = body.span().end;

    Ok(Stmt::For(Box::new(ForStmt {
        init,
        cond,
        incr,
        body,
        span: Span { start, end },
    })))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = parse_expr(parser, BindingPower::Default)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        value,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    }))
}
