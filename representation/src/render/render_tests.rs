//! Tests for templates and scopes.

#[cfg(test)]
mod tests {
    use crate::render::{FnTemplate, JsonTemplate, Scope, Template, TemplateRegistry};
    use crate::testing::TempViews;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Map, Value};

    #[test]
    fn json_template_parses_the_backing_file() {
        let views = TempViews::new().unwrap();
        let path = views.file("static.json", r#"{"status": "ok"}"#).unwrap();

        let mut bindings = Map::new();
        let mut scope = Scope::new(&path, &mut bindings);
        let value = JsonTemplate::new().render(&mut scope).unwrap();
        assert_eq!(value, json!({"status": "ok"}));
    }

    #[test]
    fn json_template_surfaces_parse_failures() {
        let views = TempViews::new().unwrap();
        let path = views.file("broken.json", "<not json>").unwrap();

        let mut bindings = Map::new();
        let mut scope = Scope::new(&path, &mut bindings);
        assert!(JsonTemplate::new().render(&mut scope).is_err());
    }

    #[test]
    fn fn_template_reads_its_bindings() {
        let views = TempViews::new().unwrap();
        let path = views.file("greeting.json", "").unwrap();

        let mut bindings = Map::new();
        bindings.insert("name".to_string(), json!("Ada"));
        let mut scope = Scope::new(&path, &mut bindings);

        let template = FnTemplate::new("greeting", |scope: &mut Scope<'_>| -> anyhow::Result<Value> {
            let name = scope
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("world")
                .to_string();
            Ok(json!({ "greeting": format!("Hello, {name}") }))
        });

        assert_eq!(
            template.render(&mut scope).unwrap(),
            json!({"greeting": "Hello, Ada"})
        );
    }

    #[test]
    fn binding_mutations_survive_the_render() {
        let views = TempViews::new().unwrap();
        let path = views.file("mutating.json", "").unwrap();

        let mut bindings = Map::new();
        {
            let mut scope = Scope::new(&path, &mut bindings);
            let template =
                FnTemplate::new("mutating", |scope: &mut Scope<'_>| -> anyhow::Result<Value> {
                    scope.set("visits", json!(1));
                    Ok(Value::Null)
                });
            template.render(&mut scope).unwrap();
        }

        assert_eq!(bindings.get("visits"), Some(&json!(1)));
    }

    #[test]
    fn templates_can_snapshot_all_bindings() {
        let views = TempViews::new().unwrap();
        let path = views.file("echo.json", "").unwrap();

        let mut bindings = Map::new();
        bindings.insert("a".to_string(), json!(1));
        bindings.insert("b".to_string(), json!("two"));
        let mut scope = Scope::new(&path, &mut bindings);

        let template = FnTemplate::new("echo", |scope: &mut Scope<'_>| -> anyhow::Result<Value> {
            Ok(Value::Object(scope.bindings().clone()))
        });

        assert_eq!(
            template.render(&mut scope).unwrap(),
            json!({"a": 1, "b": "two"})
        );
    }

    #[test]
    fn scope_exposes_path_and_source() {
        let views = TempViews::new().unwrap();
        let path = views.file("raw.json", "contents").unwrap();

        let mut bindings = Map::new();
        let scope = Scope::new(&path, &mut bindings);
        assert_eq!(scope.path(), path.as_path());
        assert_eq!(scope.source().unwrap(), "contents");
        assert!(!scope.has("anything"));
    }

    #[test]
    fn registry_lookup_and_replacement() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.is_empty());

        registry.register_fn("user", |_: &mut Scope<'_>| -> anyhow::Result<Value> {
            Ok(json!("first"))
        });
        registry.register_fn("user", |_: &mut Scope<'_>| -> anyhow::Result<Value> {
            Ok(json!("second"))
        });

        assert!(registry.contains("user"));
        assert!(registry.get("ghost").is_none());
        assert_eq!(registry.len(), 1);

        let views = TempViews::new().unwrap();
        let path = views.file("user.json", "").unwrap();
        let mut bindings = Map::new();
        let mut scope = Scope::new(&path, &mut bindings);
        let rendered = registry.get("user").unwrap().render(&mut scope).unwrap();
        assert_eq!(rendered, json!("second"));
    }
}
