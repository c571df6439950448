use crate::app::domain::{Certificate, PreviewKind, Project};

/// Everything the preview dialog needs to render. `meta` rows are
/// (glyph, text) pairs and depend on what kind of entry is being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPayload {
    pub title: String,
    pub description: String,
    pub kind: PreviewKind,
    pub meta: Vec<(String, String)>,
    pub link: Option<String>,
}

pub fn project_payload(project: &Project) -> PreviewPayload {
    PreviewPayload {
        title: project.title.clone(),
        description: project.summary.clone(),
        kind: PreviewKind::Project,
        meta: vec![
            ("\u{1f4c2}".to_string(), "Project".to_string()),
            ("\u{1f4bb}".to_string(), project.technology.clone()),
        ],
        link: project.link.clone(),
    }
}

pub fn certificate_payload(certificate: &Certificate) -> PreviewPayload {
    PreviewPayload {
        title: certificate.title.clone(),
        description: format!(
            "Issued by {} in {}.",
            certificate.issuer, certificate.year
        ),
        kind: PreviewKind::Certificate,
        meta: vec![
            ("\u{1f3c5}".to_string(), "Certification".to_string()),
            (
                "\u{1f393}".to_string(),
                "Professional Development".to_string(),
            ),
        ],
        link: certificate.link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            title: "Classifier".to_string(),
            summary: "Vision pipeline".to_string(),
            technology: "Machine Learning".to_string(),
            link: Some("https://example.test".to_string()),
        }
    }

    fn certificate() -> Certificate {
        Certificate {
            title: "Deep Learning".to_string(),
            issuer: "Example Institute".to_string(),
            year: "2024".to_string(),
            link: None,
        }
    }

    #[test]
    fn test_project_meta_carries_technology() {
        let payload = project_payload(&project());
        assert_eq!(payload.kind, PreviewKind::Project);
        assert_eq!(payload.meta[0].1, "Project");
        assert_eq!(payload.meta[1].1, "Machine Learning");
        assert_eq!(payload.link.as_deref(), Some("https://example.test"));
    }

    #[test]
    fn test_certificate_meta_is_fixed_pair() {
        let payload = certificate_payload(&certificate());
        assert_eq!(payload.kind, PreviewKind::Certificate);
        assert_eq!(payload.meta[0].1, "Certification");
        assert_eq!(payload.meta[1].1, "Professional Development");
        assert!(payload.description.contains("Example Institute"));
        assert!(payload.link.is_none());
    }
}
