//! One-off maintenance commands invoked from `main` before the server starts.

use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::modules::visas::model::{
    CreateVisaDto, Faq, Package, PackagePricing, QuickFacts, Testimonial,
};
use crate::modules::visas::service::VisaService;
use crate::utils::password::hash_password;

pub async fn create_admin(
    db: &PgPool,
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.message))?;

    let result = sqlx::query(
        "INSERT INTO users (name, username, email, password, role)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(name)
    .bind(username.to_lowercase())
    .bind(email.to_lowercase())
    .bind(hashed_password)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("User with this username already exists".into());
    }

    Ok(())
}

/// Resets the visa catalog to the stock Schengen Visa document. Existing
/// rows are removed first so reseeding is idempotent.
pub async fn seed_visa(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    sqlx::query("DELETE FROM visas").execute(db).await?;

    let visa = schengen_visa();
    VisaService::create(db, visa)
        .await
        .map_err(|e| format!("Failed to seed visa: {}", e.message))?;

    Ok(())
}

fn schengen_visa() -> CreateVisaDto {
    CreateVisaDto {
        name: "Schengen Visa".to_string(),
        slug: "schengen-visa".to_string(),
        description: Some(
            "The Schengen Visa lets you travel easily across 27 European countries, perfect \
             for tourism, business, or multi-country trips. It saves time, reduces paperwork, \
             and gives you the freedom to explore iconic cities and diverse cultures with \
             ease. Begin your European adventure today and apply for your Schengen Visa with \
             us."
                .to_string(),
        ),
        featured_image: Some("/schengen-visa.png".to_string()),
        quick_facts: Some(QuickFacts {
            validity: "2 weeks - 5 years".to_string(),
            processing_time: "10 - 15 working days".to_string(),
            number_of_countries: "27 Schengen states".to_string(),
            visa_type: "Tourist Visa".to_string(),
        }),
        testimonials: vec![
            Testimonial {
                title: "Hassle-Free Process".to_string(),
                name: "John D.".to_string(),
                purpose: "Tourist Visa – Schengen (Italy)".to_string(),
                text: "The team handled my application with great care and attention. I \
                       received clear guidance at every step and my visa came through faster \
                       than expected. Exploring Rome was a dream come true!"
                    .to_string(),
            },
            Testimonial {
                title: "Excellent Guidance".to_string(),
                name: "Maria L.".to_string(),
                purpose: "Tourist Visa – Schengen (Spain)".to_string(),
                text: "VisaExperts explained the requirements clearly and helped me prepare \
                       the perfect set of documents. Thanks to their support, my trip to \
                       Barcelona went ahead without a single hiccup."
                    .to_string(),
            },
            Testimonial {
                title: "Fast and Reliable".to_string(),
                name: "Omar H.".to_string(),
                purpose: "Tourist Visa – Schengen (Netherlands)".to_string(),
                text: "I was impressed by how quickly they processed my application. \
                       Everything was transparent, professional, and efficient. I had my \
                       visa in hand well before my planned travel dates."
                    .to_string(),
            },
        ],
        faqs: vec![
            Faq {
                question: "How long does it take to get a Schengen visa?".to_string(),
                answer: "The processing time for a Schengen visa is usually between 10 to 15 \
                         working days. However, it can vary depending on the embassy, season, \
                         and your nationality. We’ll guide you through preparation to avoid \
                         unnecessary delays."
                    .to_string(),
            },
            Faq {
                question: "How long can I stay in Europe with a Schengen visa?".to_string(),
                answer: "A Schengen visa allows you to stay up to 90 days within a 180-day \
                         period. It is valid across all 27 Schengen countries, so you can \
                         enjoy multi-country travel without extra visas."
                    .to_string(),
            },
            Faq {
                question: "Do I need travel insurance for a Schengen visa?".to_string(),
                answer: "Yes, travel insurance is mandatory. It must cover at least €30,000 \
                         for medical expenses and be valid across all Schengen states for the \
                         entire duration of your stay."
                    .to_string(),
            },
            Faq {
                question: "Can I apply for multiple entry with a Schengen visa?".to_string(),
                answer: "Yes, you can apply for single, double, or multiple-entry Schengen \
                         visas depending on your travel needs. Multiple-entry visas are ideal \
                         if you plan to leave and re-enter the Schengen zone during your trip."
                    .to_string(),
            },
            Faq {
                question: "When should I apply for my Schengen visa?".to_string(),
                answer: "It is recommended to apply at least 15 days before your trip and no \
                         earlier than 6 months in advance. Applying early gives you enough \
                         time in case of additional document requests."
                    .to_string(),
            },
            Faq {
                question: "Which embassy should I apply to for my Schengen visa?".to_string(),
                answer: "You should apply to the embassy of the country where you will spend \
                         the most days. If your stay is equal in multiple countries, apply to \
                         the embassy of the country you will enter first."
                    .to_string(),
            },
            Faq {
                question: "What documents are required for a Schengen visa?".to_string(),
                answer: "The required documents usually include a valid passport, completed \
                         application form, recent photos, proof of accommodation, travel \
                         insurance, flight reservation, and financial statements. Requirements \
                         may vary by embassy."
                    .to_string(),
            },
            Faq {
                question: "Can I extend my Schengen visa once I am in Europe?".to_string(),
                answer: "Extensions are only granted in exceptional cases such as medical \
                         emergencies or force majeure. For regular travel, you cannot extend \
                         your Schengen visa and must leave once your stay period ends."
                    .to_string(),
            },
            Faq {
                question: "What is the Schengen visa fee?".to_string(),
                answer: "The standard Schengen visa fee is €80 for adults and €40 for \
                         children aged 6 to 12. Children under 6 are exempt. Some categories \
                         may also have reduced or waived fees."
                    .to_string(),
            },
            Faq {
                question: "Is it guaranteed that I will get a Schengen visa?".to_string(),
                answer: "A visa approval is not guaranteed, as it depends on the documents, \
                         purpose of travel, and embassy decision. However, with proper \
                         guidance and complete documentation, your chances of approval are \
                         much higher."
                    .to_string(),
            },
        ],
        packages: vec![
            Package {
                name: "Basic".to_string(),
                description: "Essential support for your Schengen visa with the required \
                              bookings sent straight to your inbox."
                    .to_string(),
                recommended: false,
                inclusions: vec![
                    "Flight reservation (dummy ticket)".to_string(),
                    "Hotel reservation".to_string(),
                    "Travel insurance".to_string(),
                    "All documents sent via email".to_string(),
                ],
                exclusions: vec![
                    "Appointment booking".to_string(),
                    "Courier service".to_string(),
                    "Full document compilation".to_string(),
                ],
                pricing: PackagePricing {
                    price: 149,
                    pricing_type: "per person".to_string(),
                },
            },
            Package {
                name: "Standard".to_string(),
                description: "Get the essentials plus hands-on help with securing your visa \
                              appointment."
                    .to_string(),
                recommended: true,
                inclusions: vec![
                    "Flight reservation (dummy ticket)".to_string(),
                    "Hotel reservation".to_string(),
                    "Travel insurance".to_string(),
                    "Appointment booking assistance".to_string(),
                    "All documents sent via email".to_string(),
                ],
                exclusions: vec![
                    "Courier service".to_string(),
                    "Full document compilation".to_string(),
                ],
                pricing: PackagePricing {
                    price: 249,
                    pricing_type: "per person".to_string(),
                },
            },
            Package {
                name: "Premium".to_string(),
                description: "Complete end-to-end support, with documents fully prepared, \
                              organized, and delivered to you."
                    .to_string(),
                recommended: false,
                inclusions: vec![
                    "Flight reservation (dummy ticket)".to_string(),
                    "Hotel reservation".to_string(),
                    "Travel insurance".to_string(),
                    "Appointment booking assistance".to_string(),
                    "Custom travel itinerary".to_string(),
                    "Passport copies, Emirates IDs, birth certificates, NOCs".to_string(),
                    "All documents compiled and organized".to_string(),
                    "Courier delivery to your address".to_string(),
                ],
                exclusions: vec![],
                pricing: PackagePricing {
                    price: 399,
                    pricing_type: "per person".to_string(),
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_document_is_valid() {
        use validator::Validate;

        let visa = schengen_visa();
        assert!(visa.validate().is_ok());
        assert_eq!(visa.slug, "schengen-visa");
        assert_eq!(visa.testimonials.len(), 3);
        assert_eq!(visa.faqs.len(), 10);
        assert_eq!(visa.packages.len(), 3);
        assert!(visa.packages[1].recommended);
    }
}
