use super::*;
use rustc_hash::FxHashSet;

#[test]
fn origin_tags() {
    assert_eq!(Var::external("M", "f").origin(), Origin::External);
    assert_eq!(Var::internal("x").origin(), Origin::Internal);
    assert_eq!(Var::foreign("print").origin(), Origin::Foreign);
}

#[test]
fn accessors() {
    let ext = Var::external("Data.List", "map");
    assert_eq!(ext.name(), "map");
    assert_eq!(ext.module(), Some("Data.List"));
    assert!(ext.is_external());
    assert!(!ext.is_foreign());

    let int = Var::internal("x");
    assert_eq!(int.name(), "x");
    assert_eq!(int.module(), None);
}

#[test]
fn display_is_qualified() {
    assert_eq!(Var::external("M", "f").to_string(), "M.f");
    assert_eq!(Var::internal("x").to_string(), "x");
    assert_eq!(Var::foreign("console").to_string(), "console");
}

#[test]
fn write_qualified_appends() {
    let mut out = String::from("<");
    Var::external("M", "f").write_qualified(&mut out);
    Var::internal("x").write_qualified(&mut out);
    assert_eq!(out, "<M.fx");
}

#[test]
fn structural_equality() {
    assert_eq!(Var::external("M", "f"), Var::external("M", "f"));
    assert_ne!(Var::external("M", "f"), Var::external("N", "f"));
    // Same spelling, different origin: different variables.
    assert_ne!(Var::internal("f"), Var::foreign("f"));

    let set: FxHashSet<Var> = [Var::internal("a"), Var::internal("a"), Var::foreign("a")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}
