use crate::catalog::Catalog;
use crate::models::ProductCard;

/// Fixed demo lists. Returned verbatim; there is no search or filtering.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    recent_searches: Vec<String>,
    recent_products: Vec<ProductCard>,
    trending_products: Vec<ProductCard>,
    saved_products: Vec<ProductCard>,
    chat_suggestions: Vec<String>,
}

impl DemoCatalog {
    pub fn new() -> Self {
        let leadership = ProductCard::new(
            "1",
            "Leadership Impact Assessment",
            "Evaluate leadership potential and effectiveness across key competencies. Ideal for management roles and leadership development programs.",
            "Leadership",
            &["Executive", "Management", "Development"],
        );
        let technical = ProductCard::new(
            "2",
            "Technical Skills Assessment",
            "Comprehensive evaluation of technical abilities for software developers, engineers, and IT professionals.",
            "Technical",
            &["Programming", "IT", "Development"],
        );
        let personality = ProductCard::new(
            "3",
            "Workplace Personality Inventory",
            "Measure work styles and behavioral tendencies to predict job fit and performance potential.",
            "Personality",
            &["Behavioral", "Workplace", "Hiring"],
        );
        let remote = ProductCard::new(
            "4",
            "Remote Work Readiness Assessment",
            "Evaluate candidates' ability to work effectively in remote or hybrid environments. Measures self-discipline, communication, and tech adaptability.",
            "Remote Work",
            &["Remote", "Hybrid", "Workplace"],
        );
        let digital = ProductCard::new(
            "5",
            "Digital Skills Proficiency Test",
            "Assess competency with essential workplace digital tools and technologies. Perfect for roles requiring digital literacy.",
            "Digital Skills",
            &["Technology", "Digital", "Competency"],
        );
        let culture = ProductCard::new(
            "6",
            "Cultural Fit & Values Alignment",
            "Measure alignment between candidate values and organizational culture to improve retention and team cohesion.",
            "Cultural Fit",
            &["Values", "Culture", "Team"],
        );

        Self {
            recent_searches: vec![
                "leadership assessment".into(),
                "technical skills test for developers".into(),
                "cognitive ability test".into(),
                "personality assessment for sales roles".into(),
            ],
            recent_products: vec![leadership, technical.clone(), personality],
            trending_products: vec![remote, digital.clone(), culture],
            saved_products: vec![technical, digital],
            chat_suggestions: vec![
                "Leadership assessments for senior managers".into(),
                "Technical skill assessments for software developers".into(),
                "Personality tests for customer support roles".into(),
                "Cognitive ability assessments for research roles".into(),
            ],
        }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for DemoCatalog {
    fn recent_searches(&self) -> Vec<String> {
        self.recent_searches.clone()
    }

    fn recent_products(&self) -> Vec<ProductCard> {
        self.recent_products.clone()
    }

    fn trending_products(&self) -> Vec<ProductCard> {
        self.trending_products.clone()
    }

    fn saved_products(&self) -> Vec<ProductCard> {
        self.saved_products.clone()
    }

    fn chat_suggestions(&self) -> Vec<String> {
        self.chat_suggestions.clone()
    }
}
