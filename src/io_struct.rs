use serde::{Deserialize, Serialize};

pub const TEXT_TYPES: [&str; 5] = [
    "Telegram post",
    "VK post",
    "Service description",
    "Sales message",
    "Warm-up post",
];

pub const TONES: [&str; 3] = ["Expert", "Warm", "Soft-sell"];

pub const LENGTHS: [&str; 3] = ["Short", "Medium", "Long"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextType {
    TelegramPost,
    VkPost,
    ServiceDescription,
    SalesMessage,
    WarmUpPost,
}

impl TextType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Telegram post" => Some(TextType::TelegramPost),
            "VK post" => Some(TextType::VkPost),
            "Service description" => Some(TextType::ServiceDescription),
            "Sales message" => Some(TextType::SalesMessage),
            "Warm-up post" => Some(TextType::WarmUpPost),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextType::TelegramPost => "Telegram post",
            TextType::VkPost => "VK post",
            TextType::ServiceDescription => "Service description",
            TextType::SalesMessage => "Sales message",
            TextType::WarmUpPost => "Warm-up post",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Expert,
    Warm,
    SoftSell,
}

impl Tone {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Expert" => Some(Tone::Expert),
            "Warm" => Some(Tone::Warm),
            "Soft-sell" => Some(Tone::SoftSell),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Expert => "Expert",
            Tone::Warm => "Warm",
            Tone::SoftSell => "Soft-sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Short" => Some(Length::Short),
            "Medium" => Some(Length::Medium),
            "Long" => Some(Length::Long),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

/// Raw wire payload for POST /generate. Field names are camelCase on the wire
/// and everything arrives as a plain string; `validate` turns it into a typed
/// request or a full list of field errors.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReqInput {
    pub business_niche: String,
    pub product: String,
    pub target_audience: String,
    pub text_type: String,
    pub tone: String,
    pub length: String,
    pub prompt: String,
}

/// Validated, trimmed request. Only constructed through
/// `GenerateReqInput::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub business_niche: String,
    pub product: String,
    pub target_audience: String,
    pub text_type: TextType,
    pub tone: Tone,
    pub length: Length,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<FieldError>,
}

fn check_text(field: &'static str, value: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            message: "value cannot be empty".to_string(),
        });
    }
    trimmed.to_string()
}

fn enum_mismatch(field: &'static str, allowed: &[&str]) -> FieldError {
    FieldError {
        field,
        message: format!("must be one of: {}", allowed.join(", ")),
    }
}

impl GenerateReqInput {
    /// Validates every field and reports all violations together, not just
    /// the first one.
    pub fn validate(&self) -> Result<GenerateRequest, ValidationErrors> {
        let mut errors = Vec::new();

        let business_niche = check_text("businessNiche", &self.business_niche, &mut errors);
        let product = check_text("product", &self.product, &mut errors);
        let target_audience = check_text("targetAudience", &self.target_audience, &mut errors);
        let prompt = check_text("prompt", &self.prompt, &mut errors);

        let text_type = TextType::from_label(&self.text_type);
        if text_type.is_none() {
            errors.push(enum_mismatch("textType", &TEXT_TYPES));
        }
        let tone = Tone::from_label(&self.tone);
        if tone.is_none() {
            errors.push(enum_mismatch("tone", &TONES));
        }
        let length = Length::from_label(&self.length);
        if length.is_none() {
            errors.push(enum_mismatch("length", &LENGTHS));
        }

        if let (Some(text_type), Some(tone), Some(length)) = (text_type, tone, length) {
            if errors.is_empty() {
                return Ok(GenerateRequest {
                    business_niche,
                    product,
                    target_audience,
                    text_type,
                    tone,
                    length,
                    prompt,
                });
            }
        }
        Err(ValidationErrors { detail: errors })
    }
}
