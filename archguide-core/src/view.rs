//! Renderer — a pure mapping from (content, view state) to a visual tree.
//!
//! [`render`] produces a backend-independent [`Screen`]. Only the selected
//! section's body is built; unselected sections contribute nothing but
//! their tab. Terminal drawing lives in the TUI crate.

use crate::content::{
    ComplianceContent, ContentStore, ImplementationContent, MaintainabilityContent,
    OverviewContent, ScalabilityContent, SectionContent, SecurityContent,
};
use crate::section::SectionId;
use crate::state::{Action, ViewState};

/// Colour role of a callout box. Mapped to concrete colours by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Positive,
    Neutral,
    Notice,
    Warning,
}

/// How the items of a list are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Checks,
    Bullets,
    Chips,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: SectionId,
    pub title: &'static str,
    pub highlighted: bool,
}

impl TabView {
    /// The event a click on this tab emits.
    pub fn action(&self) -> Action {
        Action::SelectSection(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub title: Option<&'static str>,
    pub style: ListStyle,
    /// `Some` draws the list as a tinted callout.
    pub tone: Option<Tone>,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub fields: Vec<(&'static str, &'static str)>,
    pub lists: Vec<ListBlock>,
}

/// One security layer. `lists` is empty unless the layer is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerView {
    pub index: usize,
    pub name: &'static str,
    pub expanded: bool,
    pub lists: Vec<ListBlock>,
}

impl LayerView {
    /// The event a click on this layer's header emits.
    pub fn action(&self) -> Action {
        Action::ToggleLayer(self.index)
    }

    pub fn marker(&self) -> &'static str {
        if self.expanded { "−" } else { "+" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    List(ListBlock),
    KeyValues {
        title: &'static str,
        pairs: Vec<(&'static str, &'static str)>,
    },
    LayerRows {
        title: &'static str,
        rows: Vec<(&'static str, &'static [&'static str])>,
    },
    Card(Card),
    Accordion(LayerView),
}

/// The whole visual tree for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<TabView>,
    pub section: SectionId,
    pub heading: &'static str,
    pub body: Vec<Block>,
    pub footer_title: &'static str,
    pub footer_text: &'static str,
}

impl Screen {
    pub fn highlighted_tab(&self) -> Option<SectionId> {
        self.tabs.iter().find(|t| t.highlighted).map(|t| t.id)
    }

    pub fn layers(&self) -> impl Iterator<Item = &LayerView> {
        self.body.iter().filter_map(|b| match b {
            Block::Accordion(layer) => Some(layer),
            _ => None,
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.body.iter().filter_map(|b| match b {
            Block::Card(card) => Some(card),
            _ => None,
        })
    }

    /// Every action this screen lets the user trigger.
    pub fn actions(&self) -> Vec<Action> {
        self.tabs
            .iter()
            .map(TabView::action)
            .chain(self.layers().map(LayerView::action))
            .collect()
    }
}

/// Build the visual tree for the current state.
pub fn render(store: &ContentStore, state: &ViewState) -> Screen {
    let tabs = store
        .sections()
        .iter()
        .map(|s| TabView {
            id: s.id,
            title: s.title,
            highlighted: s.id == state.selected_section,
        })
        .collect();

    let section = store.section(state.selected_section);
    let body = match &section.content {
        SectionContent::Overview(c) => overview_body(c),
        SectionContent::Security(c) => security_body(c, state),
        SectionContent::Scalability(c) => scalability_body(c),
        SectionContent::Compliance(c) => compliance_body(c),
        SectionContent::Maintainability(c) => maintainability_body(c),
        SectionContent::Implementation(c) => implementation_body(c),
    };

    Screen {
        title: store.banner.title,
        subtitle: store.banner.subtitle,
        tabs,
        section: section.id,
        heading: section.title,
        body,
        footer_title: store.guidance.title,
        footer_text: store.guidance.text,
    }
}

fn list(
    title: Option<&'static str>,
    style: ListStyle,
    tone: Option<Tone>,
    items: &[&'static str],
) -> ListBlock {
    ListBlock {
        title,
        style,
        tone,
        items: items.to_vec(),
    }
}

fn overview_body(c: &OverviewContent) -> Vec<Block> {
    vec![
        Block::List(list(
            Some("Core Principles"),
            ListStyle::Checks,
            Some(Tone::Accent),
            c.principles,
        )),
        Block::KeyValues {
            title: "Technology Stack",
            pairs: c.stack.to_vec(),
        },
        Block::LayerRows {
            title: "Reference Architecture Layers",
            rows: c
                .reference_layers
                .iter()
                .map(|l| (l.layer, l.components))
                .collect(),
        },
    ]
}

fn security_body(c: &SecurityContent, state: &ViewState) -> Vec<Block> {
    c.layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let expanded = state.is_layer_expanded(index);
            let lists = if expanded {
                vec![
                    list(Some("Tools:"), ListStyle::Chips, None, layer.tools),
                    list(Some("Practices:"), ListStyle::Bullets, None, layer.practices),
                ]
            } else {
                Vec::new()
            };
            Block::Accordion(LayerView {
                index,
                name: layer.name,
                expanded,
                lists,
            })
        })
        .collect()
}

fn scalability_body(c: &ScalabilityContent) -> Vec<Block> {
    let mut body: Vec<Block> = c
        .strategies
        .iter()
        .map(|s| {
            Block::Card(Card {
                title: s.kind,
                fields: vec![("Implementation", s.implementation), ("Pattern", s.pattern)],
                lists: Vec::new(),
            })
        })
        .collect();
    body.push(Block::List(list(
        Some("Monitoring & Autoscaling"),
        ListStyle::Bullets,
        Some(Tone::Positive),
        c.monitoring,
    )));
    body
}

fn compliance_body(c: &ComplianceContent) -> Vec<Block> {
    let mut body: Vec<Block> = c
        .frameworks
        .iter()
        .map(|f| {
            Block::Card(Card {
                title: f.name,
                fields: Vec::new(),
                lists: vec![
                    list(Some("Tools:"), ListStyle::Chips, None, f.tools),
                    list(Some("Key Requirements:"), ListStyle::Checks, None, f.requirements),
                ],
            })
        })
        .collect();
    body.push(Block::List(list(
        Some("Auditability"),
        ListStyle::Plain,
        Some(Tone::Neutral),
        c.auditability,
    )));
    body
}

fn maintainability_body(c: &MaintainabilityContent) -> Vec<Block> {
    let mut body = vec![
        Block::List(list(Some("CI/CD Pipeline"), ListStyle::Plain, None, c.cicd)),
        Block::Heading("Observability Stack"),
    ];
    body.extend(c.observability.iter().map(|o| {
        Block::Card(Card {
            title: o.area,
            fields: vec![("Stack", o.stack), ("Practice", o.practice)],
            lists: Vec::new(),
        })
    }));
    body.push(Block::List(list(
        Some("Documentation Standards"),
        ListStyle::Plain,
        Some(Tone::Notice),
        c.documentation,
    )));
    body
}

fn implementation_body(c: &ImplementationContent) -> Vec<Block> {
    let mut body = vec![Block::Heading("Service Stack")];
    body.extend(c.services.iter().map(|s| {
        let lists = if s.databases.is_empty() {
            Vec::new()
        } else {
            vec![list(None, ListStyle::Chips, None, s.databases)]
        };
        Block::Card(Card {
            title: s.name,
            fields: s.details.iter().map(|d| (d.label(), d.value())).collect(),
            lists,
        })
    }));
    body.push(Block::List(list(
        Some("Infrastructure"),
        ListStyle::Bullets,
        Some(Tone::Warning),
        c.infrastructure,
    )));
    body
}
