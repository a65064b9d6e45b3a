//! Static question catalog: four dimensions of three yes/no questions each.

use serde::Serialize;

pub const QUESTIONS_PER_SECTION: usize = 3;
pub const SECTION_COUNT: usize = 4;
pub const TOTAL_QUESTIONS: usize = SECTION_COUNT * QUESTIONS_PER_SECTION;

/// Icon tag rendered next to a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIcon {
    Target,
    BarChart,
    Cpu,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub icon: SectionIcon,
    pub questions: [&'static str; QUESTIONS_PER_SECTION],
}

impl Section {
    /// Global answer indices covered by this section.
    pub fn index_range(section_index: usize) -> std::ops::Range<usize> {
        let start = section_index * QUESTIONS_PER_SECTION;
        start..start + QUESTIONS_PER_SECTION
    }
}

pub static SECTIONS: [Section; SECTION_COUNT] = [
    Section {
        title: "ESTRATÉGIA",
        icon: SectionIcon::Target,
        questions: [
            "O CX da sua empresa está integrado ao planejamento estratégico?",
            "Existem métricas específicas de experiência atreladas a resultados de negócio?",
            "Todas as lideranças de empresa participam de decisões sobre CX?",
        ],
    },
    Section {
        title: "OPERAÇÃO",
        icon: SectionIcon::BarChart,
        questions: [
            "Dados de diferentes touchpoints são integrados em visão única do cliente?",
            "Há equipes multiciplinares de CX ou há apenas um departamento com essa atribuição?",
            "Os processos são desenhados a partir da perspectiva do cliente?",
        ],
    },
    Section {
        title: "TECNOLOGIA",
        icon: SectionIcon::Cpu,
        questions: [
            "Sua empresa possui  plataformas que permitem personalização de soluções em escala para seus clientes?",
            "Há aplicação de IA para permitir antecipação às necessidades dos clientes?",
            "As automações de atendimento preservam a  humanização em momentos críticos?",
        ],
    },
    Section {
        title: "CULTURA",
        icon: SectionIcon::Users,
        questions: [
            "A empresa possui programas de capacitação multi departamentais para CX?",
            "Há programa de escuta ativa compartilhado entre vários canais?",
            "Inovação em CX é incentivada e recompensada?",
        ],
    },
];

/// Maps a section-local question position to its slot in the flat answer set.
pub fn global_index(section_index: usize, question_index: usize) -> Option<usize> {
    if section_index >= SECTION_COUNT || question_index >= QUESTIONS_PER_SECTION {
        return None;
    }
    Some(section_index * QUESTIONS_PER_SECTION + question_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_index_matches_section_ranges() {
        for (section_index, section) in SECTIONS.iter().enumerate() {
            let range = Section::index_range(section_index);
            for question_index in 0..section.questions.len() {
                let index = global_index(section_index, question_index).expect("in range");
                assert!(range.contains(&index));
            }
        }
        assert_eq!(global_index(3, 2), Some(TOTAL_QUESTIONS - 1));
        assert_eq!(global_index(4, 0), None);
        assert_eq!(global_index(0, 3), None);
    }

    #[test]
    fn question_text_is_kept_as_published() {
        assert_eq!(
            SECTIONS[1].questions[1],
            "Há equipes multiciplinares de CX ou há apenas um departamento com essa atribuição?"
        );
        let platforms = SECTIONS[2].questions[0];
        assert!(platforms.starts_with("Sua empresa possui  plataformas"));
        let automation = SECTIONS[2].questions[2];
        assert!(automation.contains("preservam a  humanização"));
    }
}
