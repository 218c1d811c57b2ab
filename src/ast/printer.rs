//! Textual renderings of the syntax tree.
//!
//! Two printers live here:
//!
//! - [`dump`] - a parenthesized, field-labeled s-expression, one group per
//!   named node, used for debugging and test fixtures. Single-valued
//!   fields are prefixed with `field_name:`; repeated children (program
//!   declarations, block bodies, class methods, parameter and argument
//!   lists) appear unlabeled; anonymous operator tokens are omitted.
//! - [`unparse`] - canonical source text. For any tree produced by the
//!   parser, re-parsing the unparsed text yields a structurally equal
//!   tree, which is what makes `dump` fixtures stable.

use super::{
    declarations::{ClassDecl, Decl, Function, Program, VarDecl},
    expressions::Expr,
    statements::{ExprStmt, ForInit, Stmt},
};

/// Renders the tree as a single-line field-labeled s-expression, e.g.
/// `(program (decl_var name: (identifier) value: (number)))`.
pub fn dump(program: &Program) -> String {
    let mut out = String::from("(program");
    for decl in &program.decls {
        out.push(' ');
        dump_decl(&mut out, decl);
    }
    out.push(')');
    out
}

fn dump_decl(out: &mut String, decl: &Decl) {
    match decl {
        Decl::Class(class) => dump_class(out, class),
        Decl::Fun(fun) => {
            out.push_str("(decl_fun function: ");
            dump_function(out, &fun.function);
            out.push(')');
        }
        Decl::Var(var) => dump_var_decl(out, var),
        Decl::Stmt(stmt) => dump_stmt(out, stmt),
        Decl::Error(_) => out.push_str("(error)"),
    }
}

fn dump_class(out: &mut String, class: &ClassDecl) {
    out.push_str("(decl_class name: (identifier)");
    if class.base.is_some() {
        out.push_str(" extends: (extends) base: (identifier)");
    }
    for method in &class.methods {
        out.push(' ');
        dump_function(out, method);
    }
    out.push(')');
}

fn dump_var_decl(out: &mut String, var: &VarDecl) {
    out.push_str("(decl_var name: (identifier)");
    if let Some(init) = &var.init {
        out.push_str(" value: ");
        dump_expr(out, init);
    }
    out.push(')');
}

fn dump_function(out: &mut String, function: &Function) {
    out.push_str("(function name: (identifier) params: (params");
    for _ in &function.params {
        out.push_str(" (identifier)");
    }
    out.push_str(") body: ");
    dump_block(out, &function.body.body);
    out.push(')');
}

fn dump_block(out: &mut String, body: &[Decl]) {
    out.push_str("(stmt_block");
    for decl in body {
        out.push(' ');
        dump_decl(out, decl);
    }
    out.push(')');
}

fn dump_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => dump_block(out, &block.body),
        Stmt::Expr(expr_stmt) => {
            out.push_str("(stmt_expr value: ");
            dump_expr(out, &expr_stmt.value);
            out.push(')');
        }
        Stmt::For(for_stmt) => {
            out.push_str("(stmt_for paren: (for_paren");
            match &for_stmt.init {
                Some(ForInit::Var(var)) => {
                    out.push_str(" init: ");
                    dump_var_decl(out, var);
                }
                Some(ForInit::Expr(expr_stmt)) => {
                    out.push_str(" init: (stmt_expr value: ");
                    dump_expr(out, &expr_stmt.value);
                    out.push(')');
                }
                None => {}
            }
            if let Some(cond) = &for_stmt.cond {
                out.push_str(" cond: ");
                dump_expr(out, cond);
            }
            if let Some(incr) = &for_stmt.incr {
                out.push_str(" incr: ");
                dump_expr(out, incr);
            }
            out.push_str(") body: ");
            dump_stmt(out, &for_stmt.body);
            out.push(')');
        }
        Stmt::If(if_stmt) => {
            out.push_str("(stmt_if cond: ");
            dump_expr(out, &if_stmt.cond);
            out.push_str(" then: ");
            dump_stmt(out, &if_stmt.then_body);
            if let Some(else_body) = &if_stmt.else_body {
                out.push_str(" else: ");
                dump_stmt(out, else_body);
            }
            out.push(')');
        }
        Stmt::Print(print) => {
            out.push_str("(stmt_print value: ");
            dump_expr(out, &print.value);
            out.push(')');
        }
        Stmt::Return(ret) => {
            out.push_str("(stmt_return");
            if let Some(value) = &ret.value {
                out.push_str(" value: ");
                dump_expr(out, value);
            }
            out.push(')');
        }
        Stmt::While(while_stmt) => {
            out.push_str("(stmt_while cond: ");
            dump_expr(out, &while_stmt.cond);
            out.push_str(" body: ");
            dump_stmt(out, &while_stmt.body);
            out.push(')');
        }
    }
}

fn dump_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Call(call) => {
            out.push_str("(expr_call callee: ");
            dump_expr(out, &call.callee);
            out.push_str(" args: (args");
            for arg in &call.args {
                out.push(' ');
                dump_expr(out, arg);
            }
            out.push_str("))");
        }
        Expr::Field(field) => {
            out.push_str("(expr_field object: ");
            dump_expr(out, &field.object);
            out.push_str(" field: (identifier))");
        }
        Expr::Infix(infix) => {
            out.push_str("(expr_infix lt: ");
            dump_expr(out, &infix.left);
            out.push_str(" rt: ");
            dump_expr(out, &infix.right);
            out.push(')');
        }
        Expr::Prefix(prefix) => {
            out.push_str("(expr_prefix rt: ");
            dump_expr(out, &prefix.operand);
            out.push(')');
        }
        Expr::Bool(_) => out.push_str("(bool)"),
        Expr::Nil(_) => out.push_str("(nil)"),
        Expr::This(_) => out.push_str("(this)"),
        Expr::Number(_) => out.push_str("(number)"),
        Expr::Str(_) => out.push_str("(string)"),
        Expr::Var(_) => out.push_str("(var name: (identifier))"),
        Expr::Grouping(grouping) => {
            out.push_str("(grouping inner: ");
            dump_expr(out, &grouping.inner);
            out.push(')');
        }
        Expr::Super(_) => out.push_str("(super field: (identifier))"),
    }
}

/// Prints the tree back as source text, one declaration per line.
///
/// The output is canonical rather than faithful to the original layout:
/// comments are gone and spacing is normalized. Error placeholder nodes
/// have no source form and print nothing.
pub fn unparse(program: &Program) -> String {
    let mut lines = vec![];
    for decl in &program.decls {
        let mut line = String::new();
        unparse_decl(&mut line, decl);
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}

fn unparse_decl(out: &mut String, decl: &Decl) {
    match decl {
        Decl::Class(class) => {
            out.push_str("class ");
            out.push_str(&class.name.name);
            if let Some(base) = &class.base {
                out.push_str(" extends ");
                out.push_str(&base.name);
            }
            out.push_str(" {");
            for method in &class.methods {
                out.push(' ');
                unparse_function(out, method);
            }
            out.push_str(" }");
        }
        Decl::Fun(fun) => {
            out.push_str("fun ");
            unparse_function(out, &fun.function);
        }
        Decl::Var(var) => unparse_var_decl(out, var),
        Decl::Stmt(stmt) => unparse_stmt(out, stmt),
        Decl::Error(_) => {}
    }
}

fn unparse_var_decl(out: &mut String, var: &VarDecl) {
    out.push_str("var ");
    out.push_str(&var.name.name);
    if let Some(init) = &var.init {
        out.push_str(" = ");
        unparse_expr(out, init);
    }
    out.push(';');
}

fn unparse_function(out: &mut String, function: &Function) {
    out.push_str(&function.name.name);
    out.push('(');
    for (i, param) in function.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.name);
    }
    out.push_str(") ");
    unparse_block(out, &function.body.body);
}

fn unparse_block(out: &mut String, body: &[Decl]) {
    out.push('{');
    for decl in body {
        let mut inner = String::new();
        unparse_decl(&mut inner, decl);
        if !inner.is_empty() {
            out.push(' ');
            out.push_str(&inner);
        }
    }
    out.push_str(" }");
}

fn unparse_expr_stmt(out: &mut String, expr_stmt: &ExprStmt) {
    unparse_expr(out, &expr_stmt.value);
    out.push(';');
}

fn unparse_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => unparse_block(out, &block.body),
        Stmt::Expr(expr_stmt) => unparse_expr_stmt(out, expr_stmt),
        Stmt::For(for_stmt) => {
            out.push_str("for (");
            match &for_stmt.init {
                Some(ForInit::Var(var)) => unparse_var_decl(out, var),
                Some(ForInit::Expr(expr_stmt)) => unparse_expr_stmt(out, expr_stmt),
                None => out.push(';'),
            }
            if let Some(cond) = &for_stmt.cond {
                out.push(' ');
                unparse_expr(out, cond);
            }
            out.push(';');
            if let Some(incr) = &for_stmt.incr {
                out.push(' ');
                unparse_expr(out, incr);
            }
            out.push_str(") ");
            unparse_stmt(out, &for_stmt.body);
        }
        Stmt::If(if_stmt) => {
            out.push_str("if ");
            unparse_expr(out, &if_stmt.cond);
            out.push(' ');
            unparse_stmt(out, &if_stmt.then_body);
            if let Some(else_body) = &if_stmt.else_body {
                out.push_str(" else ");
                unparse_stmt(out, else_body);
            }
        }
        Stmt::Print(print) => {
            out.push_str("print ");
            unparse_expr(out, &print.value);
            out.push(';');
        }
        Stmt::Return(ret) => {
            out.push_str("return");
            if let Some(value) = &ret.value {
                out.push(' ');
                unparse_expr(out, value);
            }
            out.push(';');
        }
        Stmt::While(while_stmt) => {
            out.push_str("while ");
            unparse_expr(out, &while_stmt.cond);
            out.push(' ');
            unparse_stmt(out, &while_stmt.body);
        }
    }
}

fn unparse_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Call(call) => {
            unparse_expr(out, &call.callee);
            out.push('(');
            for (i, arg) in call.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                unparse_expr(out, arg);
            }
            out.push(')');
        }
        Expr::Field(field) => {
            unparse_expr(out, &field.object);
            out.push('.');
            out.push_str(&field.field.name);
        }
        Expr::Infix(infix) => {
            unparse_expr(out, &infix.left);
            out.push(' ');
            out.push_str(&infix.op.value);
            out.push(' ');
            unparse_expr(out, &infix.right);
        }
        Expr::Prefix(prefix) => {
            out.push_str(&prefix.op.value);
            unparse_expr(out, &prefix.operand);
        }
        Expr::Bool(lit) => out.push_str(if lit.value { "true" } else { "false" }),
        Expr::Nil(_) => out.push_str("nil"),
        Expr::This(_) => out.push_str("this"),
        // f64 Display never prints an exponent, so the output always
        // re-lexes as a number token.
        Expr::Number(lit) => out.push_str(&lit.value.to_string()),
        Expr::Str(lit) => out.push_str(&lit.value),
        Expr::Var(var) => out.push_str(&var.name.name),
        Expr::Grouping(grouping) => {
            out.push('(');
            unparse_expr(out, &grouping.inner);
            out.push(')');
        }
        Expr::Super(sup) => {
            out.push_str("super.");
            out.push_str(&sup.field.name);
        }
    }
}
