//! Compilation of a customer profile into the analysis prompt.

mod template;

use chrono::NaiveDate;

use crate::domain::{CustomerProfile, Locale};

pub use template::fill_placeholders;

static ANALYSIS_ZH_TW: &str = include_str!("../../assets/prompts/analysis.zh-TW.txt");
static ANALYSIS_EN: &str = include_str!("../../assets/prompts/analysis.en.txt");

/// Inputs to rendering besides the profile itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub locale: Locale,
    /// Date used to state the customer's approximate age. Omitted from the prompt when `None`.
    pub reference_date: Option<NaiveDate>,
}

impl PromptOptions {
    pub fn new(locale: Locale) -> Self {
        Self { locale, reference_date: None }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

/// Embedded analysis template for `locale`.
pub fn analysis_template(locale: Locale) -> &'static str {
    match locale {
        Locale::ZhTw => ANALYSIS_ZH_TW,
        Locale::En => ANALYSIS_EN,
    }
}

/// Render the analysis prompt for `profile`.
///
/// Never fails and is deterministic for identical inputs. Profile text is
/// interpolated verbatim. When no target product is given the prompt asks
/// the model to pick one instead of leaving an empty slot.
pub fn render_prompt(profile: &CustomerProfile, options: &PromptOptions) -> String {
    let locale = options.locale;
    let age_note = options
        .reference_date
        .and_then(|date| profile.age_on(date))
        .map(|age| age_note(locale, age))
        .unwrap_or_default();
    let product = profile.has_target_product().then_some(profile.target_product.as_str());
    let product_line = target_product_line(locale, product);
    let product_instruction = target_product_instruction(locale, product);

    fill_placeholders(analysis_template(locale), |name| match name {
        "birthday" => Some(profile.birthday.as_str()),
        "age_note" => Some(age_note.as_str()),
        "gender" => Some(profile.gender.label(locale)),
        "occupation" => Some(profile.occupation.as_str()),
        "interests" => Some(profile.interests.as_str()),
        "income" => Some(profile.income.as_str()),
        "history" => Some(profile.history.as_str()),
        "quotes" => Some(profile.quotes.as_str()),
        "target_product_line" => Some(product_line.as_str()),
        "target_product_instruction" => Some(product_instruction.as_str()),
        _ => None,
    })
}

fn age_note(locale: Locale, age: u32) -> String {
    match locale {
        Locale::ZhTw => format!(" (約 {} 歲)", age),
        Locale::En => format!(" (about {} years old)", age),
    }
}

fn target_product_line(locale: Locale, product: Option<&str>) -> String {
    match (locale, product) {
        (_, Some(product)) => format!("\"{}\"", product),
        (Locale::ZhTw, None) => "未指定 (請依專業自行判斷適合商品)".to_string(),
        (Locale::En, None) => {
            "not specified (use your judgment to choose a suitable product)".to_string()
        }
    }
}

fn target_product_instruction(locale: Locale, product: Option<&str>) -> String {
    match (locale, product) {
        (Locale::ZhTw, Some(product)) => {
            format!("業務員指定主推「{}」，請務必將該商品包裝在兩個策略中。", product)
        }
        (Locale::ZhTw, None) => {
            "業務員未指定主推商品，請依客戶缺口推薦最適合的商品。".to_string()
        }
        (Locale::En, Some(product)) => format!(
            "The salesperson wants to lead with \"{}\". Build that product into both strategies.",
            product
        ),
        (Locale::En, None) => "No product was specified. Recommend the product that best fills \
                               the customer's coverage gap."
            .to_string(),
    }
}
