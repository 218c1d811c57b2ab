//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Declarations (classes, functions, variables)
//! - Control flow statements and the for clause
//! - Expression precedence and associativity
//! - Mandatory parenthesized conditions
//! - Error recovery at statement boundaries

use crate::{
    ast::{
        declarations::Decl,
        expressions::Expr,
        statements::{ForInit, Stmt},
    },
    lexer::tokens::TokenKind,
    parse,
};

#[test]
fn test_parse_empty_program() {
    let (program, errors) = parse("");

    assert!(errors.is_empty());
    assert!(program.decls.is_empty());
}

#[test]
fn test_parse_variable_declaration() {
    let (program, errors) = parse("var x = 42;");

    assert!(errors.is_empty());
    assert_eq!(program.decls.len(), 1);

    let Decl::Var(var) = &program.decls[0] else {
        panic!("expected a variable declaration");
    };
    assert_eq!(var.name.name, "x");
    assert!(matches!(var.init, Some(Expr::Number(_))));
}

#[test]
fn test_parse_variable_declaration_without_initializer() {
    let (program, errors) = parse("var x;");

    assert!(errors.is_empty());
    let Decl::Var(var) = &program.decls[0] else {
        panic!("expected a variable declaration");
    };
    assert!(var.init.is_none());
}

#[test]
fn test_parse_function_declaration() {
    let (program, errors) = parse("fun add(a, b) { return a + b; }");

    assert!(errors.is_empty());
    let Decl::Fun(fun) = &program.decls[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(fun.function.name.name, "add");
    assert_eq!(fun.function.params.len(), 2);
    assert_eq!(fun.function.params[0].name, "a");
    assert_eq!(fun.function.params[1].name, "b");
    assert_eq!(fun.function.body.body.len(), 1);
    assert!(matches!(
        fun.function.body.body[0],
        Decl::Stmt(Stmt::Return(_))
    ));
}

#[test]
fn test_parse_class_declaration() {
    let (program, errors) = parse("class A { }");

    assert!(errors.is_empty());
    let Decl::Class(class) = &program.decls[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(class.name.name, "A");
    assert!(class.base.is_none());
    assert!(class.methods.is_empty());
}

#[test]
fn test_parse_class_with_inheritance_and_methods() {
    let (program, errors) = parse("class Square extends Shape { area() { return this.side * this.side; } }");

    assert!(errors.is_empty());
    let Decl::Class(class) = &program.decls[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(class.name.name, "Square");
    assert_eq!(class.base.as_ref().unwrap().name, "Shape");
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].name.name, "area");
    assert!(class.methods[0].params.is_empty());
}

#[test]
fn test_parse_precedence_factor_over_term() {
    let (program, errors) = parse("1 + 2 * 3;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Infix(plus) = &stmt.value else {
        panic!("expected an infix expression");
    };
    assert_eq!(plus.op.kind, TokenKind::Plus);
    assert!(matches!(*plus.left, Expr::Number(_)));

    let Expr::Infix(star) = &*plus.right else {
        panic!("expected `*` to bind tighter than `+`");
    };
    assert_eq!(star.op.kind, TokenKind::Star);
}

#[test]
fn test_parse_left_associative_term() {
    let (program, errors) = parse("1 - 2 - 3;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Infix(outer) = &stmt.value else {
        panic!("expected an infix expression");
    };
    // ((1 - 2) - 3)
    assert!(matches!(*outer.left, Expr::Infix(_)));
    assert!(matches!(*outer.right, Expr::Number(_)));
}

#[test]
fn test_parse_right_associative_assignment() {
    let (program, errors) = parse("a = b = c;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Infix(outer) = &stmt.value else {
        panic!("expected an infix expression");
    };
    assert_eq!(outer.op.kind, TokenKind::Assignment);
    // a = (b = c)
    assert!(matches!(*outer.left, Expr::Var(_)));
    let Expr::Infix(inner) = &*outer.right else {
        panic!("expected nested assignment on the right");
    };
    assert_eq!(inner.op.kind, TokenKind::Assignment);
}

#[test]
fn test_parse_assignment_target_is_unrestricted() {
    // `1 = 2` is structurally valid; rejection is a later semantic pass
    let (program, errors) = parse("1 = 2;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Infix(infix) = &stmt.value else {
        panic!("expected an infix expression");
    };
    assert_eq!(infix.op.kind, TokenKind::Assignment);
    assert!(matches!(*infix.left, Expr::Number(_)));
}

#[test]
fn test_parse_call_and_field_chain() {
    let (program, errors) = parse("a.b().c;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    // Field(Call(Field(Var a, b), []), c)
    let Expr::Field(outer) = &stmt.value else {
        panic!("expected a field access at the top");
    };
    assert_eq!(outer.field.name, "c");

    let Expr::Call(call) = &*outer.object else {
        panic!("expected a call under the field access");
    };
    assert!(call.args.is_empty());

    let Expr::Field(inner) = &*call.callee else {
        panic!("expected a field access as the callee");
    };
    assert_eq!(inner.field.name, "b");
    assert!(matches!(*inner.object, Expr::Var(_)));
}

#[test]
fn test_parse_prefix_binds_looser_than_call() {
    let (program, errors) = parse("-a.b;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Prefix(prefix) = &stmt.value else {
        panic!("expected a prefix expression");
    };
    assert_eq!(prefix.op.kind, TokenKind::Dash);
    assert!(matches!(*prefix.operand, Expr::Field(_)));
}

#[test]
fn test_parse_logical_precedence() {
    let (program, errors) = parse("a && b || c;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Infix(or) = &stmt.value else {
        panic!("expected an infix expression");
    };
    assert_eq!(or.op.kind, TokenKind::Or);
    let Expr::Infix(and) = &*or.left else {
        panic!("expected `&&` to bind tighter than `||`");
    };
    assert_eq!(and.op.kind, TokenKind::And);
}

#[test]
fn test_parse_super_field() {
    let (program, errors) = parse("super.init();");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Expr(stmt)) = &program.decls[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Call(call) = &stmt.value else {
        panic!("expected a call");
    };
    let Expr::Super(sup) = &*call.callee else {
        panic!("expected a super reference");
    };
    assert_eq!(sup.field.name, "init");
}

#[test]
fn test_parse_if_requires_parenthesized_condition() {
    let (_, errors) = parse("if (true) print 1;");
    assert!(errors.is_empty());

    let (program, errors) = parse("if true print 1;");
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].is_lexical());
    // The error points at `true`, where the `(` was expected
    assert_eq!(errors[0].get_position().line, 1);
    assert_eq!(errors[0].get_position().column, 4);
    // The tree still exists, with a placeholder at the recovery point
    assert!(program
        .decls
        .iter()
        .any(|decl| matches!(decl, Decl::Error(_))));
}

#[test]
fn test_parse_while_requires_parenthesized_condition() {
    let (_, errors) = parse("while (x < 10) x = x + 1;");
    assert!(errors.is_empty());

    let (_, errors) = parse("while x < 10 print x;");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_parse_if_condition_is_a_grouping() {
    let (program, errors) = parse("if (true) print 1; else print 2;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::If(if_stmt)) = &program.decls[0] else {
        panic!("expected an if statement");
    };
    assert!(matches!(if_stmt.cond, Expr::Grouping(_)));
    assert!(matches!(if_stmt.then_body, Stmt::Print(_)));
    assert!(matches!(if_stmt.else_body, Some(Stmt::Print(_))));
}

#[test]
fn test_parse_for_with_all_clauses() {
    let (program, errors) = parse("for (var i = 0; i < 3; i = i + 1) print i;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::For(for_stmt)) = &program.decls[0] else {
        panic!("expected a for statement");
    };
    assert!(matches!(for_stmt.init, Some(ForInit::Var(_))));
    assert!(for_stmt.cond.is_some());
    assert!(for_stmt.incr.is_some());
    assert!(matches!(for_stmt.body, Stmt::Print(_)));
}

#[test]
fn test_parse_for_with_expression_initializer() {
    let (program, errors) = parse("for (i = 0; i < 3;) print i;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::For(for_stmt)) = &program.decls[0] else {
        panic!("expected a for statement");
    };
    assert!(matches!(for_stmt.init, Some(ForInit::Expr(_))));
    assert!(for_stmt.incr.is_none());
}

#[test]
fn test_parse_for_with_empty_clauses() {
    let (program, errors) = parse("for (;;) print 1;");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::For(for_stmt)) = &program.decls[0] else {
        panic!("expected a for statement");
    };
    assert!(for_stmt.init.is_none());
    assert!(for_stmt.cond.is_none());
    assert!(for_stmt.incr.is_none());
}

#[test]
fn test_parse_block_statement() {
    let (program, errors) = parse("{ var x = 1; print x; }");

    assert!(errors.is_empty());
    let Decl::Stmt(Stmt::Block(block)) = &program.decls[0] else {
        panic!("expected a block statement");
    };
    assert_eq!(block.body.len(), 2);
}

#[test]
fn test_parse_return_without_value() {
    let (program, errors) = parse("fun f() { return; }");

    assert!(errors.is_empty());
    let Decl::Fun(fun) = &program.decls[0] else {
        panic!("expected a function declaration");
    };
    let Decl::Stmt(Stmt::Return(ret)) = &fun.function.body.body[0] else {
        panic!("expected a return statement");
    };
    assert!(ret.value.is_none());
}

#[test]
fn test_parse_missing_semicolon() {
    let (_, errors) = parse("print 1");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_rejects_trailing_comma_in_arguments() {
    let (_, errors) = parse("f(1,);");

    assert_eq!(errors.len(), 1);
}

#[test]
fn test_parse_rejects_trailing_comma_in_parameters() {
    let (_, errors) = parse("fun f(a,) { }");

    assert!(!errors.is_empty());
}

#[test]
fn test_parse_recovers_at_statement_boundary() {
    let (program, errors) = parse("var = 1; print 2;");

    // One diagnostic for the malformed declaration, and the next
    // statement still parses
    assert_eq!(errors.len(), 1);
    assert_eq!(program.decls.len(), 2);
    assert!(matches!(program.decls[0], Decl::Error(_)));
    assert!(matches!(program.decls[1], Decl::Stmt(Stmt::Print(_))));
}

#[test]
fn test_parse_recovers_inside_blocks() {
    let (program, errors) = parse("{ var = 1; print 2; }");

    assert_eq!(errors.len(), 1);
    let Decl::Stmt(Stmt::Block(block)) = &program.decls[0] else {
        panic!("expected a block statement");
    };
    assert_eq!(block.body.len(), 2);
    assert!(matches!(block.body[0], Decl::Error(_)));
    assert!(matches!(block.body[1], Decl::Stmt(Stmt::Print(_))));
}

#[test]
fn test_parse_stray_close_curly_does_not_loop() {
    let (program, errors) = parse("} print 1;");

    assert_eq!(errors.len(), 1);
    assert!(matches!(program.decls[0], Decl::Error(_)));
    assert!(matches!(program.decls[1], Decl::Stmt(Stmt::Print(_))));
}

#[test]
fn test_parse_one_diagnostic_per_malformed_statement() {
    let (_, errors) = parse("var = 1; var = 2; print 3;");

    assert_eq!(errors.len(), 2);
}

#[test]
fn test_parse_unterminated_string_never_panics() {
    let (_, errors) = parse("print \"abc;");

    let lexical = errors.iter().filter(|e| e.is_lexical()).count();
    let syntax = errors.len() - lexical;
    assert_eq!(lexical, 1);
    assert!(syntax <= 1);
}

#[test]
fn test_parse_sample_class_program() {
    let source = concat!(
        "class Foo { init() { print \"init\"; return; print \"nope\"; } } ",
        "var foo = Foo(); ",
        "print foo.init();"
    );
    let (program, errors) = parse(source);

    assert!(errors.is_empty());
    assert_eq!(program.decls.len(), 3);

    let Decl::Class(class) = &program.decls[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(class.name.name, "Foo");
    assert!(class.base.is_none());
    assert_eq!(class.methods.len(), 1);

    let init = &class.methods[0];
    assert_eq!(init.name.name, "init");
    assert!(init.params.is_empty());
    // Unreachable code after `return;` is not the parser's business
    assert_eq!(init.body.body.len(), 3);
    assert!(matches!(init.body.body[0], Decl::Stmt(Stmt::Print(_))));
    assert!(matches!(init.body.body[1], Decl::Stmt(Stmt::Return(_))));
    assert!(matches!(init.body.body[2], Decl::Stmt(Stmt::Print(_))));

    let Decl::Var(var) = &program.decls[1] else {
        panic!("expected a variable declaration");
    };
    assert_eq!(var.name.name, "foo");
    assert!(matches!(var.init, Some(Expr::Call(_))));

    let Decl::Stmt(Stmt::Print(print)) = &program.decls[2] else {
        panic!("expected a print statement");
    };
    let Expr::Call(call) = &print.value else {
        panic!("expected a call");
    };
    assert!(matches!(*call.callee, Expr::Field(_)));
}

#[test]
fn test_parse_spans_nest_and_stay_ordered() {
    let (program, errors) = parse("var x = 1;\nprint x;");

    assert!(errors.is_empty());
    let first = program.decls[0].span();
    let second = program.decls[1].span();

    // Siblings in increasing order, both inside the program span
    assert!(first.end.offset <= second.start.offset);
    assert!(program.span.start.offset <= first.start.offset);
    assert!(second.end.offset <= program.span.end.offset);

    let Decl::Var(var) = &program.decls[0] else {
        panic!("expected a variable declaration");
    };
    let init_span = var.init.as_ref().unwrap().span();
    assert!(first.start.offset <= init_span.start.offset);
    assert!(init_span.end.offset <= first.end.offset);
}
