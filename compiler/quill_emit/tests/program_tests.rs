//! End-to-end emission of a small program tree.
//!
//! The node types here stand in for a real backend's syntax tree: each
//! implements `Render` by issuing layout, naming, and text calls, and the
//! tests check the complete output under every preset.

use pretty_assertions::assert_eq;
use quill_emit::{render_sep, render_to_string, EmitConfig, EmitContext, Render, Var};

enum Expr {
    Var(Var),
    Int(i64),
    Call(Box<Expr>, Vec<Expr>),
}

enum Stmt {
    Let(Var, Expr),
    Expr(Expr),
    Func {
        name: Var,
        params: Vec<Var>,
        body: Vec<Stmt>,
    },
    Return(Expr),
}

struct Module {
    imports: Vec<String>,
    body: Vec<Stmt>,
}

impl Render for Expr {
    fn render(&self, ctx: &mut EmitContext) {
        match self {
            Expr::Var(var) => ctx.emit_var(var),
            Expr::Int(n) => ctx.emit_owned(n.to_string()),
            Expr::Call(callee, args) => {
                callee.render(ctx);
                ctx.emit_static("(");
                render_sep(ctx, args, ",");
                ctx.emit_static(")");
            }
        }
    }
}

impl Render for Stmt {
    fn render(&self, ctx: &mut EmitContext) {
        match self {
            Stmt::Let(var, value) => ctx.line(|ctx| {
                ctx.emit_static("let ");
                ctx.emit_var(var);
                ctx.emit_static("=");
                value.render(ctx);
                ctx.emit_static(";");
            }),
            Stmt::Expr(expr) => ctx.line(|ctx| {
                expr.render(ctx);
                ctx.emit_static(";");
            }),
            Stmt::Return(expr) => ctx.line(|ctx| {
                ctx.emit_static("return ");
                expr.render(ctx);
                ctx.emit_static(";");
            }),
            Stmt::Func { name, params, body } => {
                ctx.line(|ctx| {
                    ctx.emit_static("function ");
                    ctx.emit_var(name);
                    ctx.emit_static("(");
                    render_sep(ctx, params, ",");
                    ctx.emit_static("){");
                });
                ctx.indent_further(|ctx| body.render(ctx));
                ctx.line(|ctx| ctx.emit_static("}"));
            }
        }
    }
}

impl Render for Module {
    fn render(&self, ctx: &mut EmitContext) {
        ctx.header(|ctx| {
            for import in &self.imports {
                ctx.line(|ctx| {
                    ctx.emit_static("import ");
                    ctx.emit(import);
                    ctx.emit_static(";");
                });
            }
        });
        self.body.render(ctx);
    }
}

fn sample() -> Module {
    let map = Var::external("List", "map");
    let double = Var::internal("double");
    let x = Var::internal("x");
    let xs = Var::internal("xs");
    let log = Var::foreign("log");

    Module {
        imports: vec!["List".to_owned()],
        body: vec![
            Stmt::Func {
                name: double.clone(),
                params: vec![x.clone()],
                body: vec![Stmt::Return(Expr::Call(
                    Box::new(Expr::Var(Var::external("Int", "mul"))),
                    vec![Expr::Var(x.clone()), Expr::Int(2)],
                ))],
            },
            Stmt::Let(
                xs.clone(),
                Expr::Call(
                    Box::new(Expr::Var(map)),
                    vec![Expr::Var(double), Expr::Var(Var::internal("input"))],
                ),
            ),
            Stmt::Expr(Expr::Call(
                Box::new(Expr::Var(log)),
                vec![Expr::Var(xs), Expr::Var(x)],
            )),
        ],
    }
}

#[test]
fn pretty_program() {
    let text = render_to_string(EmitConfig::pretty(), &sample());
    let expected = "\
import List;
function _0(_1){
    return _2/*Int.mul*/(_1,2);
}
let _3=_4/*List.map*/(_0,_5);
log(_3,_1);
";
    assert_eq!(text, expected);
}

#[test]
fn compact_program() {
    let text = render_to_string(EmitConfig::compact(), &sample());
    assert_eq!(
        text,
        "import List;function _0(_1){return _2(_1,2);}let _3=_4(_0,_5);log(_3,_1);"
    );
}

#[test]
fn pseudo_program() {
    let text = render_to_string(EmitConfig::pseudo(), &sample());
    let expected = "\
function double(x){
    return Int.mul(x,2);
}
let xs=List.map(double,input);
log(xs,x);
";
    assert_eq!(text, expected);
}

#[test]
fn nested_functions_indent_by_step() {
    let inner = Stmt::Func {
        name: Var::internal("inner"),
        params: vec![],
        body: vec![Stmt::Return(Expr::Int(1))],
    };
    let outer = Stmt::Func {
        name: Var::internal("outer"),
        params: vec![],
        body: vec![inner],
    };
    let config = EmitConfig::pseudo().with_indent_step(2);
    let expected = "\
function outer(){
  function inner(){
    return 1;
  }
}
";
    assert_eq!(render_to_string(config, &outer), expected);
}

#[test]
fn same_program_same_labels_across_runs() {
    let first = render_to_string(EmitConfig::compact(), &sample());
    let second = render_to_string(EmitConfig::compact(), &sample());
    assert_eq!(first, second);
}
