//! Fixed option sets offered by the generation form.
//!
//! The server accepts any string for these fields; the enums only constrain
//! what the form itself can submit.

/// Business category picker. Defaults to the first option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BusinessCategory {
    #[default]
    Hospitality,
    RestaurantCafe,
    Ecommerce,
    ServiceBusiness,
    PersonalBrand,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 5] = [
        BusinessCategory::Hospitality,
        BusinessCategory::RestaurantCafe,
        BusinessCategory::Ecommerce,
        BusinessCategory::ServiceBusiness,
        BusinessCategory::PersonalBrand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BusinessCategory::Hospitality => "Hotel / Hospitality",
            BusinessCategory::RestaurantCafe => "Restaurant / Cafe",
            BusinessCategory::Ecommerce => "E-commerce / D2C",
            BusinessCategory::ServiceBusiness => "Service Business",
            BusinessCategory::PersonalBrand => "Personal Brand",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PrimaryGoal {
    #[default]
    BookingsOrSales,
    BrandTrust,
    PromoteOffer,
    Awareness,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 4] = [
        PrimaryGoal::BookingsOrSales,
        PrimaryGoal::BrandTrust,
        PrimaryGoal::PromoteOffer,
        PrimaryGoal::Awareness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PrimaryGoal::BookingsOrSales => "Get more bookings / sales",
            PrimaryGoal::BrandTrust => "Build brand trust",
            PrimaryGoal::PromoteOffer => "Promote an offer",
            PrimaryGoal::Awareness => "Increase awareness",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BrandTone {
    #[default]
    Professional,
    Friendly,
    Bold,
    Premium,
}

impl BrandTone {
    pub const ALL: [BrandTone; 4] = [
        BrandTone::Professional,
        BrandTone::Friendly,
        BrandTone::Bold,
        BrandTone::Premium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BrandTone::Professional => "Professional",
            BrandTone::Friendly => "Friendly",
            BrandTone::Bold => "Bold",
            BrandTone::Premium => "Premium",
        }
    }
}

/// Output sections the user wants. All are selected on a fresh form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    TextAds,
    MarketingCopy,
    StructuredJson,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::TextAds,
        OutputFormat::MarketingCopy,
        OutputFormat::StructuredJson,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::TextAds => "Text Ads",
            OutputFormat::MarketingCopy => "Marketing Copy",
            OutputFormat::StructuredJson => "Structured JSON",
        }
    }
}

/// Suggested call-to-action. The form starts with none chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallToAction {
    BookNow,
    OrderNow,
    LearnMore,
    ContactUs,
}

impl CallToAction {
    pub const ALL: [CallToAction; 4] = [
        CallToAction::BookNow,
        CallToAction::OrderNow,
        CallToAction::LearnMore,
        CallToAction::ContactUs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CallToAction::BookNow => "Book now",
            CallToAction::OrderNow => "Order now",
            CallToAction::LearnMore => "Learn more",
            CallToAction::ContactUs => "Contact us",
        }
    }
}
