#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_marker_steps() {
        assert_eq!(Step::G.render(), "g");
        assert_eq!(Step::Anonymous.render(), "__");
        assert!(!Step::G.is_prefix());
        assert!(!Step::Anonymous.is_prefix());
    }

    #[test]
    fn test_method_step_without_args() {
        let step = Step::method("next", vec![]);
        assert_eq!(step.render(), "next()");
        assert!(!step.is_prefix());
    }

    #[test]
    fn test_method_step_with_args() {
        let step = Step::method("next", vec!["a".into(), "b".into()]);
        assert_eq!(step.render(), "next(a, b)");
    }

    #[test]
    fn test_prefix_steps_render_verbatim() {
        let raw = Step::raw("// comment ");
        let assign = Step::assign("a = ");

        assert_eq!(raw.render(), "// comment ");
        assert_eq!(assign.render(), "a = ");
        assert!(raw.is_prefix());
        assert!(assign.is_prefix());
    }

    #[test]
    fn test_method_args_are_not_escaped() {
        let step = Step::method("has", vec!["'name'".into(), "\"x, y\"".into()]);
        assert_eq!(step.render(), "has('name', \"x, y\")");
    }

    #[test]
    fn test_step_serde() {
        let step = Step::method("hasLabel", vec!["'person'".into()]);
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["type"], "Method");
        assert_eq!(json["value"]["name"], "hasLabel");

        let restored: Step = serde_json::from_value(json).unwrap();
        assert_eq!(restored, step);

        let json = serde_json::to_value(Step::G).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "G" }));
    }

    #[test]
    fn test_into_args() {
        assert!(().into_args().is_empty());
        assert_eq!("x".into_args(), vec!["x"]);
        assert_eq!(String::from("x").into_args(), vec!["x"]);
        assert_eq!(42i32.into_args(), vec!["42"]);
        assert_eq!(["1", "2"].into_args(), vec!["1", "2"]);
        assert_eq!(vec![1, 2, 3].into_args(), vec!["1", "2", "3"]);
        assert_eq!(("name", 7, true).into_args(), vec!["name", "7", "true"]);

        let ids = [4u64, 5];
        assert_eq!(ids[..].into_args(), vec!["4", "5"]);
    }

    #[test]
    fn test_nested_traversal_args() {
        let mut inner = __();
        inner.out("'knows'");

        assert_eq!((&inner).into_args(), vec!["__.out('knows')"]);
        assert_eq!(inner.into_args(), vec!["__.out('knows')"]);
    }
}
