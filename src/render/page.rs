//! 页面渲染
//!
//! 用 Handlebars 把视图快照渲染成完整的 HTML 页面。模板默认转义 HTML，
//! 列表条目带 `data-key` 属性，值为渲染标识。

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ProfileSummary, ProjectEntry, SkillBadge, TimelineEntry};
use crate::view::{HeroIntro, RenderKey, ViewSnapshot};

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");

/// 带渲染标识的列表条目
#[derive(Debug, Serialize)]
struct Keyed<'a, T: Serialize> {
    key: String,
    #[serde(flatten)]
    item: &'a T,
}

fn keyed<T: RenderKey + Serialize>(items: &[T]) -> Vec<Keyed<'_, T>> {
    items
        .iter()
        .map(|item| Keyed {
            key: item.render_key(),
            item,
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    profile: Option<&'a ProfileSummary>,
    hero_intro: Option<&'a HeroIntro>,
    rotating_role: Option<&'a str>,
    skills: Vec<Keyed<'a, SkillBadge>>,
    timeline: Vec<Keyed<'a, TimelineEntry>>,
    projects: Vec<Keyed<'a, ProjectEntry>>,
    role_stream_path: &'a str,
}

/// 页面渲染器
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &self.registry.get_templates().keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// 渲染完整页面；未加载的字段渲染为占位
    pub fn render_page(&self, snapshot: &ViewSnapshot) -> Result<String> {
        let context = PageContext {
            profile: snapshot.profile.as_ref(),
            hero_intro: snapshot.hero_intro.as_ref(),
            rotating_role: snapshot.rotating_role.as_deref(),
            skills: snapshot.skills.as_deref().map(keyed).unwrap_or_default(),
            timeline: snapshot.timeline.as_deref().map(keyed).unwrap_or_default(),
            projects: snapshot.projects.as_deref().map(keyed).unwrap_or_default(),
            role_stream_path: crate::api::ROLE_STREAM_PATH,
        };

        Ok(self.registry.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Catalog;
    use crate::view::track_by_timeline;

    fn loaded_snapshot() -> ViewSnapshot {
        let catalog = Catalog::shipped();
        ViewSnapshot {
            hero_intro: Some(HeroIntro::from_profile(&catalog.profile)),
            profile: Some(catalog.profile),
            rotating_role: Some(catalog.roles[0].clone()),
            skills: Some(catalog.skills),
            timeline: Some(catalog.timeline),
            projects: Some(catalog.projects),
        }
    }

    #[test]
    fn test_render_full_page() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_page(&loaded_snapshot()).unwrap();

        assert!(html.contains("Olá, eu sou Guilherme Varella!"));
        assert!(html.contains("Desenvolvedor Angular"));
        assert!(html.contains(r#"data-key="NgRx""#));
        assert!(html.contains(r#"href="https://storyboard-guilherme-varella.netlify.app""#));
        assert!(html.contains("Advanced"));
    }

    #[test]
    fn test_timeline_items_carry_composite_key() {
        let renderer = PageRenderer::new().unwrap();
        let snapshot = loaded_snapshot();
        let html = renderer.render_page(&snapshot).unwrap();

        for entry in snapshot.timeline.as_deref().unwrap_or_default() {
            let key = track_by_timeline(entry);
            assert!(html.contains(&format!(r#"data-key="{key}""#)), "missing key {key}");
        }
    }

    #[test]
    fn test_content_is_escaped() {
        let renderer = PageRenderer::new().unwrap();
        let mut snapshot = loaded_snapshot();
        snapshot.skills = Some(vec![SkillBadge::new(
            "<script>alert(1)</script>",
            crate::models::SkillLevel::Learning,
            ["a & b"],
        )]);

        let html = renderer.render_page(&snapshot).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_render_before_load_shows_placeholders() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_page(&ViewSnapshot::default()).unwrap();
        assert!(html.contains("Carregando"));
        assert!(!html.contains("data-key"));
    }
}
