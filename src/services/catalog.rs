//! 内置内容目录
//!
//! 作品集的全部文案都在这里，编译进二进制，运行期不可修改。

use crate::models::{ProfileSummary, ProjectEntry, SkillBadge, SkillLevel, TimelineEntry};

/// 作品集内容目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub profile: ProfileSummary,
    /// 轮换角色，使用前会过滤空白项
    pub roles: Vec<String>,
    pub skills: Vec<SkillBadge>,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl Catalog {
    /// 随站点发布的内容
    pub fn shipped() -> Self {
        Self {
            profile: shipped_profile(),
            roles: shipped_roles(),
            skills: shipped_skills(),
            timeline: shipped_timeline(),
            projects: shipped_projects(),
        }
    }
}

fn shipped_profile() -> ProfileSummary {
    ProfileSummary::new(
        "Guilherme Raul Varella da Silva",
        "Guilherme Varella",
        "Angular Front-end Engineer",
        "Crio experiências digitais acessíveis, performáticas e escaláveis com foco em Angular, RxJS e boas práticas.",
        "https://www.linkedin.com/in/guilherme-varella/",
    )
}

fn shipped_roles() -> Vec<String> {
    [
        "Desenvolvedor Angular",
        "Entusiasta de RxJS",
        "Especialista em UI/UX",
        "Criador de Design Systems",
        "Integrador de APIs Rest",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn shipped_skills() -> Vec<SkillBadge> {
    vec![
        SkillBadge::new(
            "Angular",
            SkillLevel::Advanced,
            [
                "Componentização inteligente com Change Detection otimizado",
                "Formulários reativos, interceptors e roteamento avançado",
                "Criação de bibliotecas compartilháveis e design systems",
            ],
        ),
        SkillBadge::new(
            "RxJS",
            SkillLevel::Advanced,
            [
                "Arquiteturas reativas, gerenciamento de estados e streams complexos",
                "Uso extenso de Higher-Order Observables, Subjects e multicasting",
                "Padronização de fluxos assíncronos com operadores customizados",
            ],
        ),
        SkillBadge::new(
            "NgRx",
            SkillLevel::Advanced,
            [
                "Implementação de stores, effects e entity adapters",
                "Criação de facades e selectors memoizados",
                "Integração com REST, WebSocket e caching inteligente",
            ],
        ),
        SkillBadge::new(
            "Node.js & APIs REST",
            SkillLevel::Intermediate,
            [
                "Desenvolvimento de APIs RESTful com NestJS e Express",
                "Integração com bancos de dados SQL e NoSQL",
                "Automação de pipelines CI/CD e testes de integração",
            ],
        ),
        SkillBadge::new(
            "HTML • CSS • TypeScript",
            SkillLevel::Advanced,
            [
                "Acessibilidade (WCAG), semântica e internacionalização",
                "Layouts responsivos com CSS moderno (Grid/Flexbox)",
                "Padrões SOLID e clean code em TypeScript",
            ],
        ),
    ]
}

fn shipped_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry::new(
            "2022 — Atual",
            "Frontend Engineer Pleno",
            "Projetos Financeiros & Banking",
            "Liderança técnica em aplicações financeiras com foco em usabilidade, escalabilidade e monitoramento contínuo.",
            ["Angular", "NgRx", "NX", "Storybook", "Jest"],
        ),
        TimelineEntry::new(
            "2020 — 2022",
            "Frontend Developer",
            "Tecnologia em Meios de Pagamento",
            "Construção de módulos SPA integrados via micro frontends, evolução de design systems e integrações complexas com APIs.",
            ["Angular", "RxJS", "Micro Frontends", "Node.js"],
        ),
        TimelineEntry::new(
            "2018 — 2020",
            "Fullstack Developer",
            "Consultoria de Software",
            "Atuação em soluções web completas, do backend Node.js ao front Angular, priorizando performance e DX.",
            ["Node.js", "NestJS", "PostgreSQL", "Angular"],
        ),
    ]
}

fn shipped_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "Orquestrador de Componentes Financeiros",
            "Biblioteca Angular compartilhada para consolidar widgets bancários, garantindo consistência visual e telemetria centralizada.",
            ["Angular Library", "Nx Workspace", "Storybook", "Telemetry"],
        )
        .with_github("https://github.com/guilhermeyvarella")
        .with_live("https://storyboard-guilherme-varella.netlify.app"),
        ProjectEntry::new(
            "Dashboard Reativa de Investimentos",
            "SPA responsiva com streams reativas, WebSockets e caching inteligente para métricas de portfólio em tempo real.",
            ["RxJS", "WebSockets", "NgRx", "Angular Material"],
        ),
        ProjectEntry::new(
            "API Gateway Node.js",
            "BFF em Node.js/NestJS para consolidar serviços bancários, aplicar segurança e orquestrar integrações REST.",
            ["Node.js", "NestJS", "REST", "OpenAPI"],
        )
        .with_github("https://github.com/guilhermeyvarella"),
    ]
}
