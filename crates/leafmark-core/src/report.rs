//! Builds the chat-bubble Markdown that summarizes a plant analysis.
//!
//! The backend returns identification and health data as JSON; the message
//! composed here is ordinary Markdown in the same dialect the assistant's
//! own replies use, so one renderer handles both.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PlantAnalysis {
    pub plant_name: String,
    #[serde(default)]
    pub plant_name_id: Option<String>,
    #[serde(default)]
    pub plant_name_en: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub health: Option<HealthAssessment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthAssessment {
    #[serde(default)]
    pub is_healthy: Option<HealthStatus>,
    #[serde(default)]
    pub diseases: Option<Suggestions<Disease>>,
    #[serde(default)]
    pub pests: Option<Suggestions<Pest>>,
    #[serde(default)]
    pub nutrient_deficiency: Option<Suggestions<Deficiency>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suggestions<T> {
    // A plain `default` would bound T: Default; the element types have no
    // meaningful default value.
    #[serde(default = "Vec::new")]
    pub suggestions: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Disease {
    pub name: String,
    pub probability: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub treatment: Option<Treatment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Treatment {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pest {
    pub name: String,
    pub probability: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deficiency {
    pub nutrient: String,
    pub probability: f64,
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default)]
    pub treatment: Option<Vec<String>>,
}

/// Composes the analysis summary shown in the chat after an image upload.
///
/// Translation lines appear only when they differ from the canonical name;
/// step and symptom lists are truncated to three entries each.
pub fn analysis_message(analysis: &PlantAnalysis) -> String {
    let mut message = format!("🌿 **{}**", analysis.plant_name);

    if let Some(name_id) = &analysis.plant_name_id {
        if !name_id.is_empty() && name_id != &analysis.plant_name {
            message.push_str(&format!("\n🇮🇩 Indonesia: **{}**", name_id));
        }
    }
    if let Some(name_en) = &analysis.plant_name_en {
        if !name_en.is_empty() && name_en != &analysis.plant_name {
            message.push_str(&format!("\n🇬🇧 English: **{}**", name_en));
        }
    }

    message.push_str(&format!(
        "\nKeyakinan: {}%\n",
        analysis.confidence.round() as i64
    ));

    if let Some(health) = &analysis.health {
        if let Some(is_healthy) = &health.is_healthy {
            let status = if is_healthy.status {
                "✅ Sehat"
            } else {
                "⚠️ Ada masalah"
            };
            message.push_str(&format!("\n**Status Kesehatan**: {}", status));
        }

        if let Some(diseases) = &health.diseases {
            if !diseases.suggestions.is_empty() {
                message.push_str("\n\n🦠 **Penyakit Terdeteksi**:");
                for disease in &diseases.suggestions {
                    message.push_str(&format!(
                        "\n• **{}** ({:.1}%)",
                        disease.name,
                        disease.probability * 100.0
                    ));
                    if let Some(description) = &disease.description {
                        message.push_str(&format!("\n  Deskripsi: {}", description));
                    }
                    if let Some(treatment) = &disease.treatment {
                        if let Some(description) = &treatment.description {
                            message.push_str(&format!("\n  Penanganan: {}", description));
                        }
                        if let Some(steps) = &treatment.steps {
                            message.push_str("\n  Langkah penanganan:");
                            for (idx, step) in steps.iter().take(3).enumerate() {
                                message.push_str(&format!("\n    {}. {}", idx + 1, step));
                            }
                        }
                    }
                }
            }
        }

        if let Some(pests) = &health.pests {
            if !pests.suggestions.is_empty() {
                message.push_str("\n\n🐛 **Hama Terdeteksi**:");
                for pest in &pests.suggestions {
                    message.push_str(&format!(
                        "\n• **{}** ({:.1}%)",
                        pest.name,
                        pest.probability * 100.0
                    ));
                    if let Some(description) = &pest.description {
                        message.push_str(&format!("\n  Deskripsi: {}", description));
                    }
                }
            }
        }

        if let Some(deficiencies) = &health.nutrient_deficiency {
            if !deficiencies.suggestions.is_empty() {
                message.push_str("\n\n📊 **Defisiensi Nutrisi**:");
                for deficiency in &deficiencies.suggestions {
                    message.push_str(&format!(
                        "\n• **{}** ({:.1}%)",
                        deficiency.nutrient,
                        deficiency.probability * 100.0
                    ));
                    if let Some(symptoms) = &deficiency.symptoms {
                        if !symptoms.is_empty() {
                            message.push_str("\n  Gejala:");
                            for symptom in symptoms.iter().take(3) {
                                message.push_str(&format!("\n    - {}", symptom));
                            }
                        }
                    }
                    if let Some(treatment) = &deficiency.treatment {
                        if !treatment.is_empty() {
                            message.push_str("\n  Penanganan:");
                            for entry in treatment.iter().take(3) {
                                message.push_str(&format!("\n    - {}", entry));
                            }
                        }
                    }
                }
            }
        }
    }

    message.push_str("\n\nKeterangan lebih lanjut tentang tanaman ini.");
    message
}

/// Prefix for the follow-up advice message fetched when problems are found.
pub fn advice_message(advice: &str) -> String {
    format!("💡 **Rekomendasi Penanganan**:\n\n{}", advice)
}
