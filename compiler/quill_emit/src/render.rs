//! The render capability implemented by tree nodes.
//!
//! A node renders itself by issuing emission, layout, and naming calls on the
//! [`EmitContext`] it is given. Node types live outside this crate; the
//! impls here cover variables, plain text, and common containers.

use crate::context::EmitContext;
use crate::var::Var;

/// Something that can be emitted as target-program text.
pub trait Render {
    fn render(&self, ctx: &mut EmitContext);
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, ctx: &mut EmitContext) {
        (**self).render(ctx);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, ctx: &mut EmitContext) {
        (**self).render(ctx);
    }
}

/// Renders nothing for `None`.
impl<T: Render> Render for Option<T> {
    fn render(&self, ctx: &mut EmitContext) {
        if let Some(node) = self {
            node.render(ctx);
        }
    }
}

/// Renders each element in order, with no separator.
impl<T: Render> Render for [T] {
    fn render(&self, ctx: &mut EmitContext) {
        for node in self {
            node.render(ctx);
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, ctx: &mut EmitContext) {
        self.as_slice().render(ctx);
    }
}

/// Verbatim text.
impl Render for str {
    fn render(&self, ctx: &mut EmitContext) {
        ctx.emit(self);
    }
}

impl Render for String {
    fn render(&self, ctx: &mut EmitContext) {
        ctx.emit(self);
    }
}

/// The variable's label under the configured naming strategy.
impl Render for Var {
    fn render(&self, ctx: &mut EmitContext) {
        ctx.emit_var(self);
    }
}

/// Render `items` in order with `sep` between neighbours.
pub fn render_sep<I>(ctx: &mut EmitContext, items: I, sep: &str)
where
    I: IntoIterator,
    I::Item: Render,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            ctx.emit(sep);
        }
        item.render(ctx);
    }
}
