//! End-to-end behaviour of the state machine and renderer together.

use archguide_core::view::{Block, ListStyle, Tone};
use archguide_core::{render, Action, ContentStore, SectionId, ViewController};

#[test]
fn overview_principles_and_stack_in_declared_order() {
    let c = ViewController::new(ContentStore::builtin());
    let screen = render(c.store(), c.state());

    let Block::List(principles) = &screen.body[0] else {
        panic!("expected principles list, got {:?}", screen.body[0]);
    };
    assert_eq!(principles.title, Some("Core Principles"));
    assert_eq!(principles.style, ListStyle::Checks);
    assert_eq!(principles.tone, Some(Tone::Accent));
    assert_eq!(
        principles.items,
        [
            "Domain-Driven Design (DDD) for service boundaries",
            "API-First approach with OpenAPI specifications",
            "Event-Driven Architecture for async communication",
            "Zero Trust Security model",
            "Infrastructure as Code (IaC)",
            "Observability by design",
        ]
    );

    let Block::KeyValues { title, pairs } = &screen.body[1] else {
        panic!("expected stack pairs, got {:?}", screen.body[1]);
    };
    assert_eq!(*title, "Technology Stack");
    assert_eq!(
        *pairs,
        [
            ("Container Runtime", "Docker, containerd"),
            ("Orchestration", "Kubernetes (K8s)"),
            ("Service Mesh", "Istio or Linkerd"),
            ("API Gateway", "Kong or Apache APISIX"),
            ("Message Broker", "Apache Kafka, RabbitMQ"),
            ("Databases", "PostgreSQL, MongoDB, Redis"),
        ]
    );

    let Block::LayerRows { rows, .. } = &screen.body[2] else {
        panic!("expected reference layers, got {:?}", screen.body[2]);
    };
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].0, "Client Layer");
    assert_eq!(rows[6].1, ["Kubernetes", "Monitoring", "Logging", "CI/CD"]);
}

#[test]
fn tab_and_accordion_walkthrough() {
    let mut c = ViewController::new(ContentStore::builtin());

    // Initial render: overview highlighted, nothing open.
    let screen = render(c.store(), c.state());
    assert_eq!(screen.highlighted_tab(), Some(SectionId::Overview));
    assert_eq!(screen.layers().count(), 0);
    assert_eq!(c.expanded_layer(), None);

    // Security: four collapsed headers.
    c.apply(Action::SelectSection(SectionId::Security));
    let screen = render(c.store(), c.state());
    let names: Vec<_> = screen.layers().map(|l| l.name).collect();
    assert_eq!(
        names,
        [
            "Identity & Access Management",
            "API Security",
            "Data Security (India Context)",
            "Runtime Security",
        ]
    );
    assert!(screen.layers().all(|l| !l.expanded));

    // Toggle layer 2: only it expands, with its tools and practices.
    c.apply(Action::ToggleLayer(2));
    let screen = render(c.store(), c.state());
    for layer in screen.layers() {
        assert_eq!(layer.expanded, layer.index == 2, "layer {}", layer.index);
    }
    let data = screen.layers().nth(2).unwrap();
    assert_eq!(data.lists[0].items.len(), 4);
    assert_eq!(data.lists[1].items.len(), 5);
    assert_eq!(data.lists[1].items[2], "PII protection per DPDPA 2023");

    // Toggle again: collapsed.
    c.apply(Action::ToggleLayer(2));
    let screen = render(c.store(), c.state());
    assert!(screen.layers().all(|l| !l.expanded));

    // Re-open, then leave for compliance: expansion discarded.
    c.apply(Action::ToggleLayer(2));
    c.apply(Action::SelectSection(SectionId::Compliance));
    assert_eq!(c.expanded_layer(), None);
    let screen = render(c.store(), c.state());
    assert_eq!(screen.highlighted_tab(), Some(SectionId::Compliance));
    let frameworks: Vec<_> = screen.cards().map(|card| card.title).collect();
    assert_eq!(
        frameworks,
        [
            "DPDPA 2023 (India)",
            "GDPR/International Data Privacy",
            "SOC2/ISO27001",
            "PCI-DSS & RBI Payment Security",
        ]
    );

    // Back to security: nothing sticky.
    c.apply(Action::SelectSection(SectionId::Security));
    let screen = render(c.store(), c.state());
    assert!(screen.layers().all(|l| !l.expanded));
}

#[test]
fn every_section_renders_a_body() {
    let mut c = ViewController::new(ContentStore::builtin());
    for id in SectionId::ALL {
        c.select_section(id);
        let screen = render(c.store(), c.state());
        assert!(!screen.body.is_empty(), "{id} has an empty body");
        assert_eq!(screen.heading, c.store().section(id).title);
    }
}
