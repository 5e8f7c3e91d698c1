//! 首屏介绍
//!
//! 从个人简介流派生问候语。

use futures_util::stream::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::models::ProfileSummary;

/// 首屏介绍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroIntro {
    pub salutation: String,
    pub description: String,
}

impl HeroIntro {
    pub fn from_profile(profile: &ProfileSummary) -> Self {
        Self {
            salutation: format!("Olá, eu sou {}!", profile.short_name),
            description: profile.description.clone(),
        }
    }
}

/// 对简介流的每个值做映射，源流多次产出时同样适用
pub fn hero_intro<S>(profiles: S) -> impl Stream<Item = HeroIntro>
where
    S: Stream<Item = ProfileSummary>,
{
    profiles.map(|profile| HeroIntro::from_profile(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn profile(short_name: &str, description: &str) -> ProfileSummary {
        ProfileSummary::new("Full", short_name, "Headline", description, "https://x")
    }

    #[test]
    fn test_salutation() {
        let intro = HeroIntro::from_profile(&profile("Guilherme Varella", "D"));
        assert_eq!(
            intro,
            HeroIntro {
                salutation: "Olá, eu sou Guilherme Varella!".to_string(),
                description: "D".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_maps_every_emission() {
        let source = stream::iter(vec![profile("Ana", "first"), profile("Bia", "second")]);
        let intros: Vec<HeroIntro> = hero_intro(source).collect().await;

        assert_eq!(intros.len(), 2);
        assert_eq!(intros[0].salutation, "Olá, eu sou Ana!");
        assert_eq!(intros[1].description, "second");
    }
}
