use crate::io_struct::{GenerateRequest, Length, Tone};

pub const FALLBACK_NOTICE: &str = "(!) Could not get a response from the AI provider; \
below is a mock draft based on your input.\n\n";

const DISCLAIMER: &str = "Important:\n\
- This text does not replace medical consultation, diagnosis, or treatment, \
and it does not make diagnoses.\n\
- Any examples and recommendations are general and informational only; with \
serious symptoms it is important to see a qualified professional.";

fn tone_note(tone: Tone) -> &'static str {
    match tone {
        Tone::Expert => {
            "The text is calm, leans on experience, and explains the logic of \
             the approach without scare tactics or loud promises."
        }
        Tone::Warm => {
            "The text is supportive, focused on care, acceptance, and a gentle \
             attitude toward the body."
        }
        Tone::SoftSell => {
            "The text invites the next step without pressure and emphasizes \
             the client's choice and freedom."
        }
    }
}

fn length_note(length: Length) -> &'static str {
    match length {
        Length::Short => "The text is compact, closer to an announcement.",
        Length::Medium => "The text is expanded, but without filler.",
        Length::Long => "The text is detailed, with several subheadings.",
    }
}

/// Deterministic templated draft used when no provider is configured or the
/// provider call fails. Pure string templating over the validated request:
/// three titles, a sub-headed body with tone and length notes, three gentle
/// CTAs, and a fixed disclaimer, in that order, separated by blank lines.
pub fn compose(req: &GenerateRequest) -> String {
    let titles = [
        format!(
            "{}: a gentle path to balance for \"{}\"",
            req.product, req.target_audience
        ),
        format!(
            "How \"{}\" can gently support the body's resources through {}",
            req.target_audience, req.product
        ),
        format!(
            "{}: a mindful look at health without promises of miracles",
            req.text_type.label()
        ),
    ];

    let titles_section = format!(
        "Titles (3 versions):\n- {}\n- {}\n- {}",
        titles[0], titles[1], titles[2]
    );

    let body_section = format!(
        "Main text (1 version):\n\
         Subheading: what \"{audience}\" comes in with\n\
         - Describe a few typical states and requests of this audience in \
         plain, understandable language.\n\n\
         Subheading: how to gently support the body's resources\n\
         - Show what careful steps a person can take, avoiding self-blame and \
         extremes.\n\n\
         Subheading: the role of the product \"{product}\"\n\
         - Explain how the product can support the body's resources and \
         day-to-day well-being, while not being a treatment, a diagnosis, or \
         a guarantee of results.\n\n\
         Subheading: realistic expectations\n\
         - Help the reader settle into gradual change and a careful approach \
         to themselves, without promises of losing every symptom in a week.\n\n\
         {tone_note}\n\
         {length_note}",
        audience = req.target_audience,
        product = req.product,
        tone_note = tone_note(req.tone),
        length_note = length_note(req.length),
    );

    let ctas = [
        "If this resonates and you would like to gently continue, you can \
         book a consultation at a convenient time, with no rush and no \
         pressure."
            .to_string(),
        format!(
            "If you have clarifying questions, you can send a direct message \
             and discuss whether the \"{}\" format suits you.",
            req.product
        ),
        "If you feel the time for a next step has come, you can leave a \
         request for a careful review of your situation."
            .to_string(),
    ];

    let cta_section = format!(
        "Gentle CTAs (3 versions):\n- {}\n- {}\n- {}",
        ctas[0], ctas[1], ctas[2]
    );

    [titles_section, body_section, cta_section, DISCLAIMER.to_string()].join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_struct::TextType;

    fn request() -> GenerateRequest {
        GenerateRequest {
            business_niche: "yoga".to_string(),
            product: "breathing course".to_string(),
            target_audience: "busy professionals".to_string(),
            text_type: TextType::TelegramPost,
            tone: Tone::Warm,
            length: Length::Short,
            prompt: "write a post".to_string(),
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let req = request();
        assert_eq!(compose(&req), compose(&req));
    }

    #[test]
    fn has_three_titles_and_three_ctas() {
        let text = compose(&request());
        let titles: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("Titles"))
            .skip(1)
            .take_while(|l| l.starts_with("- "))
            .collect();
        assert_eq!(titles.len(), 3);

        let ctas: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("Gentle CTAs"))
            .skip(1)
            .take_while(|l| l.starts_with("- "))
            .collect();
        assert_eq!(ctas.len(), 3);
    }

    #[test]
    fn interpolates_product_audience_and_text_type() {
        let text = compose(&request());
        let first_title_block: String = text
            .lines()
            .take_while(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(first_title_block.contains("breathing course"));
        assert!(text.contains("busy professionals"));
        assert!(text.contains("Telegram post"));
    }

    #[test]
    fn disclaimer_is_verbatim_and_last() {
        let text = compose(&request());
        assert!(text.ends_with(DISCLAIMER));
    }

    #[test]
    fn tone_and_length_notes_follow_the_request() {
        let mut req = request();
        req.tone = Tone::Expert;
        req.length = Length::Long;
        let text = compose(&req);
        assert!(text.contains(tone_note(Tone::Expert)));
        assert!(text.contains(length_note(Length::Long)));
        assert!(!text.contains(tone_note(Tone::Warm)));
        assert!(!text.contains(length_note(Length::Short)));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let text = compose(&request());
        let titles = text.find("Titles (3 versions):").unwrap();
        let body = text.find("Main text (1 version):").unwrap();
        let ctas = text.find("Gentle CTAs (3 versions):").unwrap();
        let disclaimer = text.find("Important:").unwrap();
        assert!(titles < body && body < ctas && ctas < disclaimer);
    }
}
