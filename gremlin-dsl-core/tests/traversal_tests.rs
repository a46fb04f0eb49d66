use gremlin_dsl_core::prelude::*;

#[test]
fn test_documented_examples() {
    assert_eq!(g().next("x").render(), "g.next(x)");
    assert_eq!(g().assign("a = ").next(()).render(), "a = g.next()");
    assert_eq!(
        g().raw("// comment").next(("1", "2")).render(),
        "// commentg.next(1, 2)"
    );
}

#[test]
fn test_modern_graph_queries() {
    // Names of people marko knows who are older than 30
    let rendered = g()
        .v(())
        .has(("'person'", "'name'", "'marko'"))
        .out("'knows'")
        .has(("'age'", "gt(30)"))
        .values("'name'")
        .render();
    assert_eq!(
        rendered,
        "g.V().has('person', 'name', 'marko').out('knows').has('age', gt(30)).values('name')"
    );

    let rendered = g()
        .v(())
        .group_count(())
        .by("label")
        .render();
    assert_eq!(rendered, "g.V().groupCount().by(label)");

    let rendered = g()
        .v(1)
        .as_("'a'")
        .out("'created'")
        .in_("'created'")
        .where_(("neq('a')",))
        .dedup(())
        .value_map(true)
        .render();
    assert_eq!(
        rendered,
        "g.V(1).as('a').out('created').in('created').where(neq('a')).dedup().valueMap(true)"
    );
}

#[test]
fn test_upsert_with_assignment() {
    let mut traversal = g();
    traversal
        .v(())
        .has(("'person'", "'name'", "'vadas'"))
        .fold(())
        .coalesce((
            __().unfold(()),
            __().add_v("'person'").property(("'name'", "'vadas'")),
        ))
        .next(());
    traversal.assign("vadas = ");

    assert_eq!(
        traversal.render(),
        "vadas = g.V().has('person', 'name', 'vadas').fold()\
         .coalesce(__.unfold(), __.addV('person').property('name', 'vadas')).next()"
    );
}

#[test]
fn test_prefix_always_lands_at_front() {
    for chained in 0..5 {
        let mut traversal = g();
        for _ in 0..chained {
            traversal.out(());
        }
        let before = traversal.render();
        traversal.raw("// header\n");

        assert_eq!(traversal.render(), format!("// header\n{}", before));
    }
}

#[test]
fn test_builder_reuse_across_statements() {
    let mut traversal = __();
    traversal.out_e("'knows'");
    traversal.in_v(());
    traversal.values("'name'");

    assert_eq!(traversal.render(), "__.outE('knows').inV().values('name')");
    assert_eq!(traversal.steps().len(), 4);
}
