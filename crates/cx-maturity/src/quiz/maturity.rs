use serde::Serialize;
use std::ops::RangeInclusive;

/// One of the four fixed maturity buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaturityLevel {
    pub level: &'static str,
    pub min_score: u8,
    pub max_score: u8,
    pub badge: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub focus: &'static str,
}

impl MaturityLevel {
    pub fn score_range(&self) -> RangeInclusive<u8> {
        self.min_score..=self.max_score
    }

    /// Human-facing range label, e.g. `4-6 SIM`.
    pub fn range_label(&self) -> String {
        format!("{}-{} SIM", self.min_score, self.max_score)
    }

    /// Bucket whose range contains `score`. Scores above the table clamp to the top bucket.
    pub fn for_score(score: u8) -> &'static MaturityLevel {
        MATURITY_LEVELS
            .iter()
            .find(|level| level.score_range().contains(&score))
            .unwrap_or(&MATURITY_LEVELS[MATURITY_LEVELS.len() - 1])
    }
}

pub static MATURITY_LEVELS: [MaturityLevel; 4] = [
    MaturityLevel {
        level: "REATIVO",
        min_score: 0,
        max_score: 3,
        badge: "🔴",
        description: "Sua marca responde a problemas ao invés de antecipar necessidades.",
        recommendation: "Priorize trilhas de Fundamentos CX e Estratégia no CONAREC",
        focus: "Estabelecer bases sólidas e visão integrada",
    },
    MaturityLevel {
        level: "ESTRUTURADO",
        min_score: 4,
        max_score: 6,
        badge: "🟡",
        description: "Processos existem mas falta integração e visão sistêmica.",
        recommendation: "Explore trilhas de Tecnologia CX e Transformação Digital",
        focus: "Integrar touchpoints e otimizar jornadas",
    },
    MaturityLevel {
        level: "OTIMIZADO",
        min_score: 7,
        max_score: 9,
        badge: "🟢",
        description: "CX é prioridade mas ainda há potencial de diferenciação.",
        recommendation: "Participe das trilhas de Inovação e Liderança CX",
        focus: "Criar vantagens competitivas sustentáveis",
    },
    MaturityLevel {
        level: "TRANSFORMADOR",
        min_score: 10,
        max_score: 12,
        badge: "🔵",
        description: "Sua marca define padrões de mercado em experiência.",
        recommendation: "Lidere discussões nas trilhas de Visão Global e Futuro CX",
        focus: "Compartilhar expertise e moldar tendências",
    },
];
