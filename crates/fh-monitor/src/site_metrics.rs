//! Static site metrics: verifiable marketing/trust figures referenced by
//! the public-content builder. Constant after process start; no mutation
//! path exists.

/// Transparency label attached to public metric surfaces.
pub const AS_OF_LABEL: &str = "Metrics as of Feb 10, 2026 (internal analytics)";

/// User-base copy. Deliberately qualitative until audited figures exist.
pub const USER_BASE_VALUE: &str = "Hundreds of";
pub const USER_BASE_DESCRIPTION: &str = "HVAC engineers worldwide";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    Active,
    InProgress,
    Planned,
}

pub struct Certification {
    pub title: &'static str,
    pub status: CertStatus,
}

/// Security/compliance posture shown in the public trust diagram.
pub const CERTIFICATIONS: [Certification; 6] = [
    Certification { title: "SOC 2 Type II", status: CertStatus::InProgress },
    Certification { title: "ISO 27001", status: CertStatus::InProgress },
    Certification { title: "256-bit Encryption", status: CertStatus::Active },
    Certification { title: "ASHRAE Standards", status: CertStatus::Active },
    Certification { title: "GDPR Ready", status: CertStatus::Active },
    Certification { title: "NIST Reference Validation", status: CertStatus::Active },
];

/// `(active, in_progress, planned)` counts over [`CERTIFICATIONS`].
pub fn cert_counts() -> (u64, u64, u64) {
    let mut active = 0;
    let mut in_progress = 0;
    let mut planned = 0;
    for cert in &CERTIFICATIONS {
        match cert.status {
            CertStatus::Active => active += 1,
            CertStatus::InProgress => in_progress += 1,
            CertStatus::Planned => planned += 1,
        }
    }
    (active, in_progress, planned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cert_counts_cover_the_table() {
        let (active, in_progress, planned) = cert_counts();
        assert_eq!(active + in_progress + planned, CERTIFICATIONS.len() as u64);
        assert_eq!(active, 4);
        assert_eq!(in_progress, 2);
    }
}
