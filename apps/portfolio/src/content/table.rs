//! Static portfolio content. Ordering within each list is display order.

use crate::content::models::{
    ContactKind, ContactLink, ContentSections, Education, Job, Profile, Section, Skills,
};

pub static PROFILE: Profile = Profile {
    name: "Yonathan Ariel Cristaldo",
    headline: "Analista en Sistemas de Computación",
    contacts: &[
        ContactLink {
            kind: ContactKind::Phone,
            href: "https://wa.me/543758487019",
            label: "3758-487019",
        },
        ContactLink {
            kind: ContactKind::Mail,
            href: "mailto:ariel.cristaldo@fceqyn.unam.edu.ar",
            label: "ariel.cristaldo@fceqyn.unam.edu.ar",
        },
        ContactLink {
            kind: ContactKind::SourceHosting,
            href: "https://github.com/CristaldoYonathan",
            label: "github.com/CristaldoYonathan",
        },
    ],
};

pub static CONTENT: ContentSections = ContentSections {
    profile: Section {
        title: "Perfil Profesional",
        content: "Analista en Sistemas con experiencia en desarrollo de software y liderazgo de proyectos. Especializado en metodologías ágiles y con un fuerte enfoque en la mejora continua de procesos de desarrollo. Buscando aplicar mis habilidades técnicas y de liderazgo en proyectos desafiantes.",
    },
    experience: Section {
        title: "Experiencia Laboral",
        content: &[
            Job {
                title: "Desarrollo de Software - EasyRent (Proyecto Institucional)",
                period: "2022-2023",
                details: &[
                    "Participé activamente en un equipo de desarrollo, aplicando metodologías ágiles.",
                    "Contribuí a la implementación de prácticas de integración y despliegue continuo (CI/CD).",
                    "Colaboré en la automatización de procesos de desarrollo y pruebas.",
                ],
            },
            Job {
                title: "Proyecto de Investigación - Universidad Nacional de Misiones",
                period: "2024-Actualidad",
                details: &[
                    "Investigación sobre \"Aprendizaje de los sistemas axiomáticos formales mediado con herramientas tecnológicas digitales\".",
                    "Aplicación de tecnologías innovadoras en entornos educativos, fomentando una cultura de mejora continua.",
                ],
            },
            Job {
                title: "Ayudantía ad honorem - Universidad Nacional de Misiones",
                period: "2021-2022",
                details: &[
                    "Asistente en las cátedras de Estadística I.",
                    "Desarrollé habilidades de liderazgo y comunicación efectiva al orientar a estudiantes.",
                ],
            },
        ],
    },
    education: Section {
        title: "Educación",
        content: &[
            Education {
                degree: "Analista en Sistemas",
                institution: "Universidad Nacional de Misiones",
                period: "2018-2023",
            },
            Education {
                degree: "Licenciatura en Sistemas de Información (En curso)",
                institution: "Universidad Nacional de Misiones",
                period: "2019-Actualidad",
            },
            Education {
                degree: "Técnico Electromecánico",
                institution: "EPET N°30",
                period: "2012-2017",
            },
        ],
    },
    skills: Section {
        title: "Habilidades",
        content: Skills {
            technical: &[
                "Metodologías ágiles (SCRUM, Kanban)",
                "Desarrollo de software",
                "Conocimientos en integración y despliegue continuo (CI/CD)",
                "Familiaridad con contenedores y orquestación",
                "Experiencia en trabajo con bases de datos SQL",
            ],
            soft: &[
                "Liderazgo de equipos",
                "Comunicación asertiva",
                "Resolución de problemas",
                "Gestión de proyectos",
                "Trabajo en equipo",
                "Adaptabilidad y aprendizaje continuo",
            ],
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::SectionKey;

    #[test]
    fn test_shipped_table_is_valid() {
        assert_eq!(CONTENT.validate(), Ok(()));
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(CONTENT.title(SectionKey::Profile), "Perfil Profesional");
        assert_eq!(CONTENT.title(SectionKey::Experience), "Experiencia Laboral");
        assert_eq!(CONTENT.title(SectionKey::Education), "Educación");
        assert_eq!(CONTENT.title(SectionKey::Skills), "Habilidades");
    }

    #[test]
    fn test_experience_display_order() {
        let periods: Vec<&str> = CONTENT.experience.content.iter().map(|j| j.period).collect();
        assert_eq!(periods, ["2022-2023", "2024-Actualidad", "2021-2022"]);
        assert_eq!(
            CONTENT.experience.content[2].details[0],
            "Asistente en las cátedras de Estadística I."
        );
    }

    #[test]
    fn test_education_display_order() {
        let degrees: Vec<&str> = CONTENT.education.content.iter().map(|e| e.degree).collect();
        assert_eq!(
            degrees,
            [
                "Analista en Sistemas",
                "Licenciatura en Sistemas de Información (En curso)",
                "Técnico Electromecánico"
            ]
        );
    }

    #[test]
    fn test_skill_lists_order() {
        let skills = &CONTENT.skills.content;
        assert_eq!(skills.technical[0], "Metodologías ágiles (SCRUM, Kanban)");
        assert_eq!(skills.technical[1], "Desarrollo de software");
        assert_eq!(skills.technical.len(), 5);
        assert_eq!(skills.soft[0], "Liderazgo de equipos");
        assert_eq!(skills.soft[5], "Adaptabilidad y aprendizaje continuo");
    }

    #[test]
    fn test_profile_contacts() {
        let kinds: Vec<ContactKind> = PROFILE.contacts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [ContactKind::Phone, ContactKind::Mail, ContactKind::SourceHosting]
        );
        assert!(PROFILE.contacts[1].href.starts_with("mailto:"));
    }
}
