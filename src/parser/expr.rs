use crate::{
    ast::{
        expressions::{
            BoolLit, CallExpr, Expr, FieldExpr, GroupingExpr, InfixExpr, NilLit, NumberLit,
            PrefixExpr, StringLit, SuperRef, ThisExpr, VarRef,
        },
        Ident,
    },
    errors::errors::{Error, ErrorImpl, ExpectedTokens},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// The generic precedence-climbing loop.
///
/// Parses a NUD (prefix/primary) unit, then folds in infix operators whose
/// binding power is strictly greater than `bp`. A token with a binding
/// power but no LED handler (the token after `1 2`, say) simply ends the
/// expression; the caller's next `expect` reports it with the right
/// expected set.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: token.value.clone(),
            },
            token.span.start,
        ));
    }

    let nud_fn = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_fn(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let power = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if power <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        left = led_fn(parser, left, power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse();

            if result.is_err() {
                Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.current_token().span.start,
                ))
            } else {
                let span = parser.advance().span;
                Ok(Expr::Number(NumberLit {
                    value: result.unwrap(),
                    span,
                }))
            }
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::Str(StringLit {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Var(VarRef {
                name: Ident {
                    name: token.value,
                    span: token.span,
                },
                span: token.span,
            }))
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Bool(BoolLit {
                value: token.kind == TokenKind::True,
                span: token.span,
            }))
        }
        TokenKind::Nil => {
            let span = parser.advance().span;
            Ok(Expr::Nil(NilLit { span }))
        }
        TokenKind::This => {
            let span = parser.advance().span;
            Ok(Expr::This(ThisExpr { span }))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    found: token.value.clone(),
                },
                token.span.start,
            ))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let op = parser.advance().clone();

    // Recursing at the operator's own power keeps every binary operator
    // left-associative under the loop's strict `>` comparison.
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.span().start,
            end: right.span().end,
        },
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let op = parser.advance().clone();

    // Recursing below `Assignment` hands any further `=` to the right-hand
    // parse first, making assignment right-associative. The left operand is
    // deliberately unrestricted: `1 = 2` is structurally valid here and
    // rejected by a later semantic pass.
    let right = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.span().start,
            end: right.span().end,
        },
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let op = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: op.span.start,
            end: operand.span().end,
        },
        op,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Default)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            // No trailing comma: an argument must follow every `,`.
            args.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: ExpectedTokens(vec![TokenKind::Comma, TokenKind::CloseParen]),
                found: token.value.clone(),
            },
            token.span.start,
        ));
    }
    let close = parser.advance().clone();

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.span().start,
            end: close.span.end,
        },
        callee: Box::new(left),
        args,
    }))
}

pub fn parse_field_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let field_token = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Field(FieldExpr {
        span: Span {
            start: left.span().start,
            end: field_token.span.end,
        },
        object: Box::new(left),
        field: Ident {
            name: field_token.value,
            span: field_token.span,
        },
    }))
}

pub fn parse_super_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let super_token = parser.advance().clone();
    parser.expect(TokenKind::Dot)?;
    let field_token = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Super(SuperRef {
        span: Span {
            start: super_token.span.start,
            end: field_token.span.end,
        },
        field: Ident {
            name: field_token.value,
            span: field_token.span,
        },
    }))
}
