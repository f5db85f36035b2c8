//! What the landing page shows when the API cannot be reached.

use std::collections::BTreeMap;

use crate::types::{BuyButton, Ebook, LandingView, SiteContent, Testimonial, VslConfig};

pub const FALLBACK_EBOOK_ID: &str = "default";

const SECTIONS: [&str; 9] = [
    "header",
    "hero",
    "vsl",
    "features",
    "proofs_of_gains",
    "testimonials",
    "pricing",
    "faq",
    "footer",
];

/// Every section visible, the built-in product and testimonials.
pub fn landing(language: &str) -> LandingView {
    LandingView {
        language: language.to_string(),
        sections: SECTIONS.iter().map(|s| (s.to_string(), true)).collect::<BTreeMap<_, _>>(),
        content: content(),
        product: ebook(),
        is_fallback_product: true,
        testimonials: testimonials(),
        vsl: VslConfig {
            enabled: true,
            title: "Assista ao Vídeo e Descubra Como Ganhar Consistentemente".into(),
            call_to_action: "Quero Acessar Agora".into(),
            ..Default::default()
        },
        proofs: Vec::new(),
    }
}

fn content() -> SiteContent {
    SiteContent {
        site_title: "Codigo R".into(),
        hero_title: "DOMINE O MERCADO CRIPTO".into(),
        hero_subtitle: "O Setup Completo que Transformou Minha Vida no Trading".into(),
        cta_primary: "Ver Vídeo Agora".into(),
        cta_secondary: "Comprar Agora".into(),
        pricing_title: "Investimento Único".into(),
        ..Default::default()
    }
}

pub fn ebook() -> Ebook {
    let button = |platform: &str, url: &str, color: &str| BuyButton {
        platform: platform.into(),
        url: url.into(),
        color: color.into(),
        enabled: true,
    };
    Ebook {
        id: FALLBACK_EBOOK_ID.into(),
        title: "Codigo R - Trading Setup Completo".into(),
        subtitle: "O método completo para dominar o trading".into(),
        description: "O método completo para dominar o trading de criptomoedas".into(),
        price: 197.0,
        original_price: Some(497.0),
        features: vec![
            "Ebook Completo (150+ páginas)".into(),
            "Setup de Trading Passo a Passo".into(),
            "Estratégias de Gestão de Risco".into(),
        ],
        bonuses: vec![
            "Planilha de Controle de Trades".into(),
            "Acesso ao Grupo VIP no Telegram".into(),
        ],
        buy_buttons: vec![
            button(
                "Hotmart",
                "https://hotmart.com/seu-produto",
                "bg-orange-500 hover:bg-orange-600",
            ),
            button(
                "Monetizze",
                "https://monetizze.com.br/seu-produto",
                "bg-blue-500 hover:bg-blue-600",
            ),
        ],
        enabled: true,
    }
}

fn testimonials() -> Vec<Testimonial> {
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
