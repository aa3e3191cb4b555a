//! Site Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    pub(super) fn form_body(url: &str) -> Value {
        json!({
            "name": "Garden Weekly",
            "url": url,
            "da": "30",
            "dr": "40",
            "monthly_traffic": "8000",
            "spam_score": "2",
            "price": "95.50",
            "category": "Home Improvement",
            "link_type": "Nofollow",
            "site_type": "Magazine",
            "description": "Seasonal gardening guides",
        })
    }
}
