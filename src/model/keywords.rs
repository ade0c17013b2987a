use log::debug;

/// A group of substrings that all map to the same guidance sentence.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const CHAT_FALLBACK: &str = "I'm here to help with recycling questions! You can ask me about specific materials like plastic, paper, glass, or metal, or upload a photo of an item you're unsure about.";

pub const IMAGE_FALLBACK: &str = "I've analyzed the image, but I'm not certain what this item is. For accurate recycling guidance, please provide more details about the material or check with your local recycling program.";

// Order is precedence: the first matching group wins.
pub const CHAT_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["plastic"],
        response: "Most plastic containers with recycling symbols 1 (PET) and 2 (HDPE) are recyclable in curbside programs. Rinse them before recycling and remove caps if required by your local program.",
    },
    KeywordRule {
        keywords: &["paper"],
        response: "Clean paper, newspapers, magazines, and cardboard are recyclable. Avoid recycling paper with food contamination, wax coating, or plastic lamination.",
    },
    KeywordRule {
        keywords: &["glass"],
        response: "Glass bottles and jars are generally recyclable. Rinse them and remove caps or lids. Note that some items like windows, mirrors, and drinking glasses are not recyclable in standard programs.",
    },
    KeywordRule {
        keywords: &["metal", "aluminum"],
        response: "Aluminum cans, steel food cans, and clean aluminum foil are recyclable. Make sure they're empty and rinsed before recycling.",
    },
    KeywordRule {
        keywords: &["electronic", "e-waste"],
        response: "Electronic waste should not go in standard recycling bins. Look for e-waste collection events or designated drop-off locations in your area.",
    },
];

// Matched against the uploaded filename, never the image bytes.
pub const IMAGE_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["plastic", "bottle"],
        response: "This appears to be a plastic bottle. Most plastic bottles (especially PET #1 and HDPE #2) are recyclable in curbside programs. Make sure to empty and rinse it before recycling.",
    },
    KeywordRule {
        keywords: &["paper", "cardboard"],
        response: "This looks like paper or cardboard. Clean, dry paper and cardboard are recyclable. Flatten cardboard boxes to save space in your recycling bin.",
    },
    KeywordRule {
        keywords: &["glass"],
        response: "This appears to be glass. Glass bottles and jars are recyclable in most programs. Rinse them before recycling.",
    },
    KeywordRule {
        keywords: &["can", "aluminum"],
        response: "This looks like a metal can. Aluminum and steel cans are highly recyclable. Rinse them before placing in your recycling bin.",
    },
];

/// Returns the response of the first rule with a keyword contained in
/// `input` (case-insensitive), or `fallback` when none match.
pub fn select(rules: &[KeywordRule], input: &str, fallback: &'static str) -> &'static str {
    let lowered = input.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.response)
        .unwrap_or(fallback)
}

pub fn select_chat_response(message: &str) -> &'static str {
    debug!("Processing chat message: {}", message);
    select(CHAT_RULES, message, CHAT_FALLBACK)
}

pub fn select_image_response(filename: &str) -> &'static str {
    debug!("Analyzing image: {}", filename);
    select(IMAGE_RULES, filename, IMAGE_FALLBACK)
}
