//! Visa catalog entities.
//!
//! A visa is mostly static marketing content; the free-form sections (quick
//! facts, testimonials, FAQs, packages) are stored as JSONB and typed here
//! so the API keeps a stable shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickFacts {
    pub validity: String,
    pub processing_time: String,
    pub number_of_countries: String,
    pub visa_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Testimonial {
    pub title: String,
    pub name: String,
    pub purpose: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PackagePricing {
    pub price: i64,
    #[serde(rename = "type")]
    pub pricing_type: String,
}

/// A service package (Basic/Standard/Premium in the seeded catalog).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Package {
    pub name: String,
    pub description: String,
    pub recommended: bool,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub pricing: PackagePricing,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Visa {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    #[schema(value_type = Option<QuickFacts>)]
    pub quick_facts: Option<Json<QuickFacts>>,
    #[schema(value_type = Vec<Testimonial>)]
    pub testimonials: Json<Vec<Testimonial>>,
    #[schema(value_type = Vec<Faq>)]
    pub faqs: Json<Vec<Faq>>,
    #[schema(value_type = Vec<Package>)]
    pub packages: Json<Vec<Package>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisaDto {
    #[validate(length(min = 1, message = "Visa name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Visa slug is required"))]
    pub slug: String,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub quick_facts: Option<QuickFacts>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisaDto {
    #[validate(length(min = 1, message = "Visa name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Visa slug is required"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub quick_facts: Option<QuickFacts>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub faqs: Option<Vec<Faq>>,
    pub packages: Option<Vec<Package>>,
}

/// Envelope shapes mirror the public API: single records nest under
/// `data.visa`, lists under `data.visas`.
#[derive(Serialize, Debug, ToSchema)]
pub struct VisaEnvelope {
    pub visa: Visa,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct VisasEnvelope {
    pub visas: Vec<Visa>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct VisaResponse {
    pub status: String,
    pub message: String,
    pub data: VisaEnvelope,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct VisaListResponse {
    pub status: String,
    pub message: String,
    pub results: usize,
    pub data: VisasEnvelope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_type_field_serializes_as_type() {
        let pricing = PackagePricing {
            price: 149,
            pricing_type: "per person".to_string(),
        };
        let json = serde_json::to_value(&pricing).unwrap();
        assert_eq!(json["type"], "per person");
        assert_eq!(json["price"], 149);
    }

    #[test]
    fn quick_facts_keys_are_camel_case() {
        let facts = QuickFacts {
            validity: "2 weeks - 5 years".to_string(),
            processing_time: "10 - 15 working days".to_string(),
            number_of_countries: "27 Schengen states".to_string(),
            visa_type: "Tourist Visa".to_string(),
        };
        let json = serde_json::to_value(&facts).unwrap();
        assert!(json.get("processingTime").is_some());
        assert!(json.get("numberOfCountries").is_some());
        assert!(json.get("processing_time").is_none());
    }

    #[test]
    fn create_dto_defaults_content_sections_to_empty() {
        let dto: CreateVisaDto =
            serde_json::from_str(r#"{"name":"Schengen Visa","slug":"schengen-visa"}"#).unwrap();
        assert!(dto.testimonials.is_empty());
        assert!(dto.faqs.is_empty());
        assert!(dto.packages.is_empty());
        assert!(dto.validate().is_ok());
    }
}
