use pistats_domain::{DomainError, PiholeStats};
use serde::Deserialize;

/// Body of `admin/api.php?summary`.
///
/// Depending on the Pi-hole version and endpoint flavour the counters arrive
/// as JSON numbers, plain strings (`"42"`) or grouped strings (`"1,234"`).
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub status: String,
    pub ads_blocked_today: NumberOrText,
    pub ads_percentage_today: NumberOrText,
    pub domains_being_blocked: NumberOrText,
    pub dns_queries_today: NumberOrText,
    pub unique_clients: NumberOrText,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl SummaryResponse {
    pub fn parse(body: &str) -> Result<Self, DomainError> {
        serde_json::from_str(body).map_err(|e| DomainError::InvalidResponse(e.to_string()))
    }

    pub fn into_stats(self, ip_address: String) -> Result<PiholeStats, DomainError> {
        Ok(PiholeStats {
            ads_blocked: self.ads_blocked_today.count("ads_blocked_today")?,
            percentage_blocked: self.ads_percentage_today.ratio("ads_percentage_today")?,
            domains_blocked: self.domains_being_blocked.display(),
            dns_queries: self.dns_queries_today.count("dns_queries_today")?,
            clients: self.unique_clients.count("unique_clients")?,
            status: self.status,
            ip_address,
        })
    }
}

impl NumberOrText {
    fn count(&self, field: &str) -> Result<u64, DomainError> {
        let parsed = match self {
            NumberOrText::Number(n) => n.as_u64(),
            NumberOrText::Text(s) => strip_grouping(s).parse().ok(),
        };
        parsed.ok_or_else(|| invalid(field, self))
    }

    fn ratio(&self, field: &str) -> Result<f64, DomainError> {
        let parsed = match self {
            NumberOrText::Number(n) => n.as_f64(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        };
        parsed
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| invalid(field, self))
    }

    fn display(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        }
    }
}

fn strip_grouping(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '_'))
        .collect()
}

fn invalid(field: &str, value: &NumberOrText) -> DomainError {
    DomainError::InvalidResponse(format!("{} has unexpected value {}", field, value.display()))
}
