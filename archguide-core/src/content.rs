//! Content store — the static reference material shown by the viewer.
//!
//! Everything here is immutable and compiled in. Each section carries a
//! payload whose shape is specific to that section, so renderers match on
//! [`SectionContent`] instead of probing for optional fields.

use crate::section::SectionId;

/// Header banner shown above the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Guidance note shown below every section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub title: &'static str,
    pub text: &'static str,
}

/// One top-level tab of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub content: SectionContent,
}

/// Section-specific payload, one variant per [`SectionId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContent {
    Overview(OverviewContent),
    Security(SecurityContent),
    Scalability(ScalabilityContent),
    Compliance(ComplianceContent),
    Maintainability(MaintainabilityContent),
    Implementation(ImplementationContent),
}

impl SectionContent {
    /// The section this payload belongs to.
    pub fn section_id(&self) -> SectionId {
        match self {
            SectionContent::Overview(_) => SectionId::Overview,
            SectionContent::Security(_) => SectionId::Security,
            SectionContent::Scalability(_) => SectionId::Scalability,
            SectionContent::Compliance(_) => SectionId::Compliance,
            SectionContent::Maintainability(_) => SectionId::Maintainability,
            SectionContent::Implementation(_) => SectionId::Implementation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewContent {
    pub principles: &'static [&'static str],
    /// Technology stack as (concern, choices) pairs, in display order.
    pub stack: &'static [(&'static str, &'static str)],
    pub reference_layers: &'static [ReferenceLayer],
}

/// One tier of the reference architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLayer {
    pub layer: &'static str,
    pub components: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityContent {
    pub layers: &'static [SecurityLayer],
}

/// Expandable record inside the security section. Order is display order only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityLayer {
    pub name: &'static str,
    pub tools: &'static [&'static str],
    pub practices: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalabilityContent {
    pub strategies: &'static [ScalingStrategy],
    pub monitoring: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingStrategy {
    pub kind: &'static str,
    pub implementation: &'static str,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceContent {
    pub frameworks: &'static [ComplianceFramework],
    pub auditability: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceFramework {
    pub name: &'static str,
    pub tools: &'static [&'static str],
    pub requirements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintainabilityContent {
    pub cicd: &'static [&'static str],
    pub observability: &'static [ObservabilityArea],
    pub documentation: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservabilityArea {
    pub area: &'static str,
    pub stack: &'static str,
    pub practice: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplementationContent {
    pub services: &'static [ServiceEntry],
    pub infrastructure: &'static [&'static str],
}

/// A row of the service stack. Services differ in which details they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: &'static str,
    pub details: &'static [ServiceDetail],
    pub databases: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDetail {
    Tool(&'static str),
    Languages(&'static str),
    Note(&'static str),
    Features(&'static str),
}

impl ServiceDetail {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceDetail::Tool(_) => "Tool",
            ServiceDetail::Languages(_) => "Languages",
            ServiceDetail::Note(_) => "Note",
            ServiceDetail::Features(_) => "Features",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ServiceDetail::Tool(v)
            | ServiceDetail::Languages(v)
            | ServiceDetail::Note(v)
            | ServiceDetail::Features(v) => v,
        }
    }
}

/// The complete, immutable content payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStore {
    pub banner: Banner,
    /// Sections in tab order. Must follow [`SectionId::ALL`].
    pub sections: &'static [Section],
    pub guidance: Guidance,
}

impl ContentStore {
    /// The compiled-in reference content.
    pub fn builtin() -> &'static ContentStore {
        &BUILTIN
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// Look up a section by id.
    ///
    /// Every store built from the closed id set has an entry per id; a miss
    /// means the store itself was declared wrong.
    pub fn section(&self, id: SectionId) -> &'static Section {
        let section = &self.sections[id.index()];
        debug_assert_eq!(section.id, id, "sections declared out of order");
        debug_assert_eq!(section.content.section_id(), id, "payload under the wrong section");
        section
    }

    /// The security layers, in display order.
    pub fn security_layers(&self) -> &'static [SecurityLayer] {
        match self.section(SectionId::Security).content {
            SectionContent::Security(security) => security.layers,
            _ => &[],
        }
    }
}

static BUILTIN: ContentStore = ContentStore {
    banner: Banner {
        title: "Enterprise Microservices Architecture",
        subtitle: "Open Source Framework with Built-in Security, Scalability & Compliance",
    },
    sections: &[
        Section {
            id: SectionId::Overview,
            title: "Architecture Overview",
            content: SectionContent::Overview(OverviewContent {
                principles: &[
                    "Domain-Driven Design (DDD) for service boundaries",
                    "API-First approach with OpenAPI specifications",
                    "Event-Driven Architecture for async communication",
                    "Zero Trust Security model",
                    "Infrastructure as Code (IaC)",
                    "Observability by design",
                ],
                stack: &[
                    ("Container Runtime", "Docker, containerd"),
                    ("Orchestration", "Kubernetes (K8s)"),
                    ("Service Mesh", "Istio or Linkerd"),
                    ("API Gateway", "Kong or Apache APISIX"),
                    ("Message Broker", "Apache Kafka, RabbitMQ"),
                    ("Databases", "PostgreSQL, MongoDB, Redis"),
                ],
                reference_layers: &[
                    ReferenceLayer {
                        layer: "Client Layer",
                        components: &["Web Apps", "Mobile Apps", "Third-party Apps"],
                    },
                    ReferenceLayer {
                        layer: "Edge Layer",
                        components: &["CDN", "Load Balancer", "WAF", "DDoS Protection"],
                    },
                    ReferenceLayer {
                        layer: "API Layer",
                        components: &["API Gateway (Kong)", "Rate Limiting", "Authentication"],
                    },
                    ReferenceLayer {
                        layer: "Service Mesh",
                        components: &["Istio Control Plane", "Envoy Proxies", "mTLS"],
                    },
                    ReferenceLayer {
                        layer: "Business Layer",
                        components: &["Microservices", "Service Discovery", "Circuit Breakers"],
                    },
                    ReferenceLayer {
                        layer: "Data Layer",
                        components: &["Databases", "Cache", "Message Queue"],
                    },
                    ReferenceLayer {
                        layer: "Platform Layer",
                        components: &["Kubernetes", "Monitoring", "Logging", "CI/CD"],
                    },
                ],
            }),
        },
        Section {
            id: SectionId::Security,
            title: "Cybersecurity Framework",
            content: SectionContent::Security(SecurityContent {
                layers: &[
                    SecurityLayer {
                        name: "Identity & Access Management",
                        tools: &[
                            "Keycloak (OAuth2/OIDC)",
                            "HashiCorp Vault (secrets)",
                            "cert-manager (TLS)",
                        ],
                        practices: &[
                            "JWT token-based auth",
                            "mTLS between services",
                            "RBAC and ABAC policies",
                        ],
                    },
                    SecurityLayer {
                        name: "API Security",
                        tools: &[
                            "Kong with rate limiting",
                            "OWASP ZAP for testing",
                            "ModSecurity WAF",
                        ],
                        practices: &["API key management", "Request validation", "DDoS protection"],
                    },
                    SecurityLayer {
                        name: "Data Security (India Context)",
                        tools: &[
                            "Vault for encryption keys",
                            "PostgreSQL with TDE",
                            "Ceph for encrypted storage",
                            "Tokenization services for card data",
                        ],
                        practices: &[
                            "Encryption at rest and in transit",
                            "Data masking and tokenization",
                            "PII protection per DPDPA 2023",
                            "Data localization for payment systems",
                            "Cross-border data transfer controls",
                        ],
                    },
                    SecurityLayer {
                        name: "Runtime Security",
                        tools: &[
                            "Falco (threat detection)",
                            "Trivy (vulnerability scanning)",
                            "Open Policy Agent",
                        ],
                        practices: &[
                            "Container scanning",
                            "Network policies",
                            "Security policies as code",
                        ],
                    },
                ],
            }),
        },
        Section {
            id: SectionId::Scalability,
            title: "Scalability Architecture",
            content: SectionContent::Scalability(ScalabilityContent {
                strategies: &[
                    ScalingStrategy {
                        kind: "Horizontal Scaling",
                        implementation: "Kubernetes HPA (CPU/Memory) and KEDA (event-driven)",
                        pattern: "Stateless services with load balancing",
                    },
                    ScalingStrategy {
                        kind: "Database Scaling",
                        implementation: "Read replicas, sharding, CQRS pattern",
                        pattern: "Vitess for MySQL, Citus for PostgreSQL",
                    },
                    ScalingStrategy {
                        kind: "Caching Strategy",
                        implementation: "Redis cluster with persistence, CDN for static content",
                        pattern: "Multi-tier caching (L1: in-memory, L2: Redis, L3: DB)",
                    },
                    ScalingStrategy {
                        kind: "Async Processing",
                        implementation: "Kafka for event streaming, Celery for task queues",
                        pattern: "Event sourcing and saga pattern for distributed transactions",
                    },
                ],
                monitoring: &[
                    "Prometheus for metrics",
                    "Grafana for visualization",
                    "Horizontal Pod Autoscaler",
                ],
            }),
        },
        Section {
            id: SectionId::Compliance,
            title: "Compliance & Governance",
            content: SectionContent::Compliance(ComplianceContent {
                frameworks: &[
                    ComplianceFramework {
                        name: "DPDPA 2023 (India)",
                        tools: &[
                            "Consent management platform",
                            "Data classification engine",
                            "Apache Ranger for governance",
                        ],
                        requirements: &[
                            "Consent-based or legitimate use processing",
                            "Privacy notices in 22 Indian languages",
                            "Data principal rights (access, correction, erasure)",
                            "Children's data protection (under 18)",
                            "Breach notification to Data Protection Board",
                            "Data localization for payments (RBI mandate)",
                            "Cross-border transfer restrictions",
                        ],
                    },
                    ComplianceFramework {
                        name: "GDPR/International Data Privacy",
                        tools: &["Apache Ranger for data governance", "Data classification tags"],
                        requirements: &[
                            "Right to erasure",
                            "Data portability",
                            "Consent management",
                            "Audit logs",
                        ],
                    },
                    ComplianceFramework {
                        name: "SOC2/ISO27001",
                        tools: &["OpenSCAP for compliance scanning", "Audit2DB for log retention"],
                        requirements: &[
                            "Access controls",
                            "Encryption",
                            "Incident response",
                            "Business continuity",
                        ],
                    },
                    ComplianceFramework {
                        name: "PCI-DSS & RBI Payment Security",
                        tools: &[
                            "Network segmentation",
                            "Tokenization services",
                            "India-based data storage",
                        ],
                        requirements: &[
                            "Cardholder data protection",
                            "Secure transmission",
                            "Regular testing",
                            "Payment data stored only in India",
                            "24-hour data repatriation if processed abroad",
                            "Card-on-File Tokenization (CoFT)",
                        ],
                    },
                ],
                auditability: &[
                    "ELK Stack for centralized logging",
                    "Immutable audit trails",
                    "Compliance reports automation",
                ],
            }),
        },
        Section {
            id: SectionId::Maintainability,
            title: "Maintainability & DevOps",
            content: SectionContent::Maintainability(MaintainabilityContent {
                cicd: &[
                    "GitLab CI/CD or Jenkins for pipelines",
                    "ArgoCD for GitOps deployment",
                    "SonarQube for code quality",
                    "Trivy for security scanning",
                ],
                observability: &[
                    ObservabilityArea {
                        area: "Logging",
                        stack: "ELK Stack (Elasticsearch, Logstash, Kibana) or Loki",
                        practice: "Structured logging with correlation IDs",
                    },
                    ObservabilityArea {
                        area: "Monitoring",
                        stack: "Prometheus + Grafana, Thanos for long-term storage",
                        practice: "RED metrics (Rate, Errors, Duration) and USE (Utilization, Saturation, Errors)",
                    },
                    ObservabilityArea {
                        area: "Tracing",
                        stack: "Jaeger or Zipkin with OpenTelemetry",
                        practice: "Distributed tracing across all services",
                    },
                    ObservabilityArea {
                        area: "Alerting",
                        stack: "Alertmanager, PagerDuty integration",
                        practice: "SLO-based alerting, runbook automation",
                    },
                ],
                documentation: &[
                    "Swagger/OpenAPI for APIs",
                    "Architecture Decision Records (ADRs)",
                    "README-driven development",
                ],
            }),
        },
        Section {
            id: SectionId::Implementation,
            title: "Implementation Stack",
            content: SectionContent::Implementation(ImplementationContent {
                services: &[
                    ServiceEntry {
                        name: "Backend Services",
                        details: &[
                            ServiceDetail::Languages(
                                "Go, Java/Spring Boot, Python/FastAPI, Node.js/NestJS",
                            ),
                            ServiceDetail::Note("Choose based on team expertise and use case"),
                        ],
                        databases: &[],
                    },
                    ServiceEntry {
                        name: "API Gateway",
                        details: &[
                            ServiceDetail::Tool("Kong Gateway (OSS)"),
                            ServiceDetail::Features(
                                "Rate limiting, authentication, transformation, analytics",
                            ),
                        ],
                        databases: &[],
                    },
                    ServiceEntry {
                        name: "Service Mesh",
                        details: &[
                            ServiceDetail::Tool("Istio"),
                            ServiceDetail::Features(
                                "mTLS, traffic management, observability, resilience",
                            ),
                        ],
                        databases: &[],
                    },
                    ServiceEntry {
                        name: "Data Layer",
                        details: &[],
                        databases: &[
                            "PostgreSQL (relational)",
                            "MongoDB (document)",
                            "Redis (cache/session)",
                            "Elasticsearch (search)",
                        ],
                    },
                ],
                infrastructure: &[
                    "Kubernetes cluster (EKS, GKE, AKS, or self-hosted in India data centers)",
                    "Terraform for IaC",
                    "Helm charts for application deployment",
                    "GitLab/GitHub for source control",
                    "India region deployment for regulated data (payments, insurance, telecom)",
                ],
            }),
        },
    ],
    guidance: Guidance {
        title: "Implementation Guidance",
        text: "Start with a pilot microservice, establish patterns, then scale. Use feature flags \
               for gradual rollouts. Invest in developer tooling and documentation from day one. \
               Consider managed services for complex components like service mesh initially.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_declaration_order() {
        let store = ContentStore::builtin();
        assert_eq!(store.sections().len(), SectionId::ALL.len());
        for (section, id) in store.sections().iter().zip(SectionId::ALL) {
            assert_eq!(section.id, id);
            assert_eq!(section.content.section_id(), id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let store = ContentStore::builtin();
        assert_eq!(store.section(SectionId::Compliance).title, "Compliance & Governance");
        assert_eq!(store.section(SectionId::Implementation).title, "Implementation Stack");
    }

    #[test]
    fn four_security_layers() {
        let layers = ContentStore::builtin().security_layers();
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[0].name, "Identity & Access Management");
        assert_eq!(layers[3].name, "Runtime Security");
        assert!(layers.iter().all(|l| !l.tools.is_empty() && !l.practices.is_empty()));
    }

    #[test]
    fn service_detail_labels() {
        assert_eq!(ServiceDetail::Tool("Istio").label(), "Tool");
        assert_eq!(ServiceDetail::Note("x").label(), "Note");
        assert_eq!(ServiceDetail::Features("mTLS").value(), "mTLS");
    }
}
