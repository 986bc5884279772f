//! Snapshot tests for rendered templates.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cname_core::{FormattedName, GeneratedFile};
use cname_express::{ArtifactKind, GenerationOptions};

fn render(kind: ArtifactKind, raw: &str, opts: GenerationOptions) -> String {
    let name = FormattedName::parse(raw).expect("valid resource name");
    kind.template(&name, &opts).render()
}

#[test]
fn test_model_file() {
    let model = render(ArtifactKind::Model, "user", GenerationOptions::default());
    insta::assert_snapshot!("model", model);
}

#[test]
fn test_route_file() {
    let route = render(ArtifactKind::Route, "user", GenerationOptions::default());
    insta::assert_snapshot!("route", route);
}

#[test]
fn test_service_linked_to_model() {
    let service = render(
        ArtifactKind::Service,
        "Order Item!!",
        GenerationOptions {
            link_model: true,
            ..GenerationOptions::default()
        },
    );
    insta::assert_snapshot!("service_with_model", service);
}

#[test]
fn test_every_template_is_named_after_the_resource() {
    for kind in ArtifactKind::ALL {
        let content = render(kind, "user", GenerationOptions::default());
        assert!(
            content.contains("User") || content.contains("user"),
            "{kind} template does not mention the resource"
        );
    }
}
