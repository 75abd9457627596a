//! Competitor and revenue model selection.

use pitchcraft_core::entities::{RevenueModel, StartupData};
use pitchcraft_core::enums::Industry;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::industry::detect_industry;
use crate::tables::{COMPETITORS, COMPETITOR_COUNT, REVENUE_MODEL_CATALOG, REVENUE_MODEL_COUNT};

/// First four sample competitors for `industry`, in declared order.
#[must_use]
pub fn select_competitors(industry: Industry) -> Vec<String> {
    let candidates = COMPETITORS
        .iter()
        .find(|(tag, _)| *tag == industry)
        .or_else(|| COMPETITORS.iter().find(|(tag, _)| *tag == Industry::Tech))
        .map_or(&[][..], |(_, names)| &names[..]);

    candidates
        .iter()
        .take(COMPETITOR_COUNT)
        .map(ToString::to_string)
        .collect()
}

/// The full revenue model catalog in declared order.
#[must_use]
pub fn revenue_model_catalog() -> Vec<RevenueModel> {
    REVENUE_MODEL_CATALOG
        .iter()
        .map(|(name, description)| RevenueModel {
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// Four distinct revenue models drawn from a uniform shuffle of the catalog.
///
/// The catalog is not filtered by industry; the detected tag is only logged.
pub fn select_revenue_models<R: Rng + ?Sized>(data: &StartupData, rng: &mut R) -> Vec<RevenueModel> {
    let industry = detect_industry(data);

    let mut models = revenue_model_catalog();
    models.shuffle(rng);
    models.truncate(REVENUE_MODEL_COUNT);

    tracing::debug!(
        %industry,
        models = ?models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
        "selected revenue models"
    );
    models
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Industry::Tech, ["TechCorp Inc.", "InnovateLabs", "CloudSync Solutions", "DataFlow Systems"])]
    #[case(Industry::Health, ["HealthTech Pro", "WellnessWorks", "MedConnect", "FitLife Solutions"])]
    #[case(Industry::Education, ["EduTech Solutions", "LearnSmart", "StudyBuddy Pro", "ClassroomCloud"])]
    #[case(Industry::Finance, ["FinTech Forward", "PayEasy Systems", "MoneyMaster", "InvestSmart"])]
    #[case(Industry::Social, ["SocialSphere", "ConnectHub", "CommunityLink", "ShareSpace"])]
    #[case(Industry::Ecommerce, ["ShopSmart", "MarketPlace Pro", "RetailRevolution", "BuyNow Solutions"])]
    #[case(Industry::Sustainability, ["GreenTech Solutions", "EcoInnovate", "SustainableSystems", "CarbonZero"])]
    fn competitors_are_a_four_item_prefix(#[case] industry: Industry, #[case] expected: [&str; 4]) {
        assert_eq!(select_competitors(industry), expected);
    }

    #[test]
    fn competitors_are_stable_across_calls() {
        assert_eq!(
            select_competitors(Industry::Finance),
            select_competitors(Industry::Finance)
        );
    }

    #[test]
    fn revenue_models_are_four_distinct_catalog_entries() {
        let catalog = revenue_model_catalog();
        let data = StartupData {
            name: "Acme".into(),
            ..StartupData::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let models = select_revenue_models(&data, &mut rng);
            assert_eq!(models.len(), 4);
            let unique: HashSet<&RevenueModel> = models.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(models.iter().all(|m| catalog.contains(m)));
        }
    }

    #[test]
    fn revenue_models_vary_across_draws() {
        let data = StartupData {
            name: "Acme".into(),
            ..StartupData::default()
        };
        let mut rng = StdRng::seed_from_u64(2024);
        let draws: HashSet<Vec<String>> = (0..30)
            .map(|_| {
                select_revenue_models(&data, &mut rng)
                    .into_iter()
                    .map(|m| m.name)
                    .collect()
            })
            .collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn same_seed_gives_same_revenue_models() {
        let data = StartupData {
            name: "Acme".into(),
            ..StartupData::default()
        };
        let first = select_revenue_models(&data, &mut StdRng::seed_from_u64(99));
        let second = select_revenue_models(&data, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
