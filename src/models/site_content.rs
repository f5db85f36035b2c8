use serde::{Deserialize, Serialize};

/// Landing page copy. One instance, replaced wholesale on PUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub site_title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub vsl_title: String,
    pub features_title: String,
    pub features_subtitle: String,
    pub pricing_title: String,
    pub pricing_subtitle: String,
    pub proofs_title: String,
    pub proofs_subtitle: String,
    pub testimonials: Vec<Testimonial>,
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

fn default_rating() -> u8 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            site_title: "Codigo R".into(),
            hero_title: "DOMINE O MERCADO CRIPTO".into(),
            hero_subtitle: "O Setup Completo que Transformou Minha Vida no Trading".into(),
            hero_description: "Descubra o método que uso para gerar lucros consistentes".into(),
            cta_primary: "Ver Vídeo Agora".into(),
            cta_secondary: "Comprar Agora".into(),
            vsl_title: "Assista ao Vídeo e Descubra Como Ganhar Consistentemente".into(),
            features_title: "O Que Você Vai Aprender".into(),
            features_subtitle:
                "Tudo o que você precisa para se tornar um trader profissional e lucrativo".into(),
            pricing_title: "Investimento Único".into(),
            pricing_subtitle: "Acesso completo ao método que mudou minha vida financeira".into(),
            proofs_title: "Provas de Ganhos Reais".into(),
            proofs_subtitle: "Resultados comprovados do método Codigo R".into(),
            testimonials: Vec::new(),
            features: Vec::new(),
        }
    }
}

impl Testimonial {
    /// Shown on the landing page while no testimonial has been configured.
    pub fn defaults() -> Vec<Testimonial> {
        let entry = |name: &str, role: &str, content: &str| Testimonial {
            name: name.into(),
            role: role.into(),
            content: content.into(),
            rating: 5,
            avatar: None,
        };
        vec![
            entry(
                "Carlos Silva",
                "Trader Iniciante",
                "Em apenas 2 meses usando o método do Codigo R, consegui recuperar tudo que perdi antes e ainda lucrei 300%. Simplesmente incrível!",
            ),
            entry(
                "Ana Costa",
                "Empresária",
                "Nunca imaginei que fosse possível ganhar dinheiro com trading. O setup é muito claro e fácil de seguir. Já estou lucrando!",
            ),
            entry(
                "Pedro Santos",
                "Estudante",
                "Comecei com R$ 500 e em 3 meses já tinha R$ 5.000. O método realmente funciona se você seguir exatamente como ensina.",
            ),
        ]
    }
}
