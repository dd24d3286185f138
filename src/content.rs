//! Static site content: ordered, immutable records consumed by the page
//! sections. The animation code only ever looks at lengths and indices.

pub const SITE_NAME: &str = "Keiner David Arias Morales";
pub const SITE_TITLE: &str = "Keiner Arias | Full Stack Developer";
pub const SITE_DESCRIPTION: &str = "Full Stack Developer specializing in ASP.NET Core, React/Angular, AWS, and secure AI integration via MCP. Building enterprise-grade applications with hexagonal architecture, DDD, and SOLID principles.";

pub const EMAIL: &str = "keinerariasmorales@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Keiner2006";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/keiner-arias";
pub const WHATSAPP_URL: &str = "https://wa.me/573206378581";
pub const WHATSAPP_DISPLAY: &str = "+57 320 637 8581";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Certifications", href: "#certifications" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Role strings cycled by the hero typewriter.
pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "Secure AI Integration",
    "Cloud Architecture",
    ".NET Core Specialist",
];

pub const TECH_BADGES: &[&str] = &[
    "C#", ".NET 9", "ASP.NET Core", "React", "Angular", "TypeScript",
    "AWS S3", "Docker", "SQL Server", "Oracle", "JWT", "MCP",
    "Entity Framework", "Tailwind CSS", "DDD", "SOLID",
];

#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub highlights: &'static [&'static str],
    pub github: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ferreteria E-commerce",
        subtitle: "AI-Powered Hardware Store Platform",
        year: "2026",
        description: "Full-stack e-commerce platform with ASP.NET Core (DDD, SOLID) and React/Angular under hexagonal architecture. Integrated Gemini 2.5 AI via MCP for real-time inventory recommendations.",
        image: "/images/mockup-ferreteria.svg",
        tech: &["ASP.NET Core", "React", "Angular", "MCP", "Gemini 2.5", "JWT", "DDD"],
        metrics: &[
            Metric { label: "Error Reduction", value: "-30%", icon: "trending-down" },
            Metric { label: "AI Accuracy", value: "95%", icon: "zap" },
        ],
        highlights: &[
            "RESTful APIs with JWT authentication",
            "AI-powered inventory recommendations via MCP",
            "Hexagonal architecture with DDD patterns",
        ],
        github: None,
    },
    Project {
        title: "FisioTrack SaaS",
        subtitle: "Clinical Management Platform",
        year: "Oct 2025",
        description: "Multi-tenant SaaS platform for physiotherapy clinics. ASP.NET Core + React with JWT multi-role auth and Oracle optimized with triggers/stored procedures.",
        image: "/images/mockup-fisiotrack.svg",
        tech: &["ASP.NET Core", "React", "Oracle", "JWT", "T-SQL", "Multi-tenant"],
        metrics: &[
            Metric { label: "Query Performance", value: "+40%", icon: "trending-up" },
            Metric { label: "Multi-tenant", value: "Yes", icon: "shield" },
        ],
        highlights: &[
            "JWT multi-role authentication system",
            "Oracle optimized with triggers and procedures",
            "Service-oriented scalable architecture",
        ],
        github: None,
    },
    Project {
        title: "MCP Development",
        subtitle: "Secure AI Protocol Bridge",
        year: "2026",
        description: "Custom MCP (Model Context Protocol) implementations in TypeScript enabling secure connections between LLMs and .NET APIs with standardized interfaces.",
        image: "/images/mockup-mcp.svg",
        tech: &["TypeScript", "MCP", "LLMs", ".NET APIs", "Security"],
        metrics: &[
            Metric { label: "Security", value: "E2E", icon: "shield" },
            Metric { label: "Interoperability", value: "100%", icon: "zap" },
        ],
        highlights: &[
            "Standardized interfaces for LLM-to-API communication",
            "End-to-end security for distributed systems",
            "Interoperable across multiple AI providers",
        ],
        github: None,
    },
    Project {
        title: "ToolTime",
        subtitle: "Inventory Management System",
        year: "May 2025",
        description: "Desktop inventory management application built with C# .NET Windows Forms. Features real-world validations, dynamic rate calculations, and version control with Git.",
        image: "/images/mockup-tooltime.svg",
        tech: &["C#", ".NET", "Windows Forms", "Git", "SQL Server"],
        metrics: &[
            Metric { label: "Validation", value: "Real-time", icon: "zap" },
            Metric { label: "Rate Calc", value: "Dynamic", icon: "trending-up" },
        ],
        highlights: &[
            "Real-world business validations",
            "Dynamic rate and tariff calculations",
            "Git version control workflow",
        ],
        github: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "C#", level: 90 },
            Skill { name: ".NET 9", level: 88 },
            Skill { name: "ASP.NET Core", level: 90 },
            Skill { name: "EF Core", level: 85 },
            Skill { name: "REST APIs", level: 92 },
            Skill { name: "JWT / OAuth", level: 85 },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "React (Vite)", level: 85 },
            Skill { name: "Angular", level: 80 },
            Skill { name: "TypeScript", level: 88 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "Tailwind CSS", level: 88 },
            Skill { name: "HTML5/CSS3", level: 92 },
        ],
    },
    SkillCategory {
        title: "Architecture",
        skills: &[
            Skill { name: "Hex Architecture", level: 85 },
            Skill { name: "DDD", level: 82 },
            Skill { name: "SOLID", level: 90 },
            Skill { name: "MCP Protocol", level: 80 },
            Skill { name: "Microservices", level: 78 },
            Skill { name: "Clean Code", level: 90 },
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        skills: &[
            Skill { name: "AWS S3", level: 78 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "Git / GitHub", level: 92 },
            Skill { name: "SQL Server", level: 88 },
            Skill { name: "Oracle", level: 82 },
            Skill { name: "Agile/Scrum", level: 85 },
        ],
    },
];

pub const TOOLS: &[&str] = &[
    "Docker", "GitHub", "Postman", "VS Code", "Azure DevOps", "Figma", "Jira",
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub featured: bool,
    pub file_url: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Introduction to Amazon S3",
        issuer: "AWS Training",
        year: "2026",
        badge: "aws",
        description: "Certificación en fundamentos de almacenamiento en la nube con Amazon S3.",
        featured: true,
        file_url: "/certificates/aws-s3-introduccion.jpeg",
    },
    Certification {
        title: "Java Foundations",
        issuer: "Oracle Academy",
        year: "2024",
        badge: "oracle",
        description: "Dominio de conceptos fundamentales de Java, POO y estructuras de datos.",
        featured: false,
        file_url: "/certificates/certificado-java.pdf",
    },
    Certification {
        title: "SOLID Principles in C# and .NET",
        issuer: "Platzi",
        year: "2025",
        badge: "platzi",
        description: "Principios de diseño de software aplicados al ecosistema .NET.",
        featured: false,
        file_url: "/certificates/diploma-solid-csharp-net.pdf",
    },
    Certification {
        title: "AI Development Initiation",
        issuer: "BIG School",
        year: "2025",
        badge: "bigschool",
        description: "Iniciación en el desarrollo de soluciones integrando Inteligencia Artificial.",
        featured: false,
        file_url: "/certificates/certificado-desarrollo-con-ia.pdf",
    },
    Certification {
        title: "Desarrollo Web Responsivo",
        issuer: "Google / FreeCodeCamp",
        year: "2024",
        badge: "freecodecamp",
        description: "Diseño de interfaces web modernas y adaptables a cualquier dispositivo.",
        featured: false,
        file_url: "/certificates/certificado-desarrollo-web-responsivo.pdf",
    },
    Certification {
        title: "Docker Certification",
        issuer: "Docker",
        year: "2024",
        badge: "docker",
        description: "Contenerización de aplicaciones y gestión de entornos de desarrollo.",
        featured: false,
        file_url: "/certificates/docker.pdf",
    },
    Certification {
        title: "Google Gemini AI",
        issuer: "Google",
        year: "2025",
        badge: "google",
        description: "Exploración y aplicación de modelos Gemini en el desarrollo de software.",
        featured: false,
        file_url: "/certificates/gemini.pdf",
    },
    Certification {
        title: "Front-End Development with React",
        issuer: "Meta / Platzi",
        year: "2024",
        badge: "react",
        description: "Desarrollo de componentes modernos y gestión de estado con React.",
        featured: false,
        file_url: "/certificates/front-end-react.png",
    },
    Certification {
        title: "Node.js Backend Development",
        issuer: "Platzi",
        year: "2024",
        badge: "node",
        description: "Construcción de APIs escalables y servicios de backend con Node.js.",
        featured: false,
        file_url: "/certificates/node.png",
    },
    Certification {
        title: "Python Programming",
        issuer: "Python Institute",
        year: "2023",
        badge: "python",
        description: "Fundamentos de programación y automatización con Python.",
        featured: false,
        file_url: "/certificates/python.png",
    },
    Certification {
        title: "Modern CSS & Layouts",
        issuer: "Frontend Masters",
        year: "2023",
        badge: "css",
        description: "Dominio de Flexbox, Grid y animaciones avanzadas con CSS.",
        featured: false,
        file_url: "/certificates/css.png",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_non_empty() {
        assert!(!ROLES.is_empty());
        assert!(ROLES.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn exactly_one_featured_certification() {
        let featured = CERTIFICATIONS.iter().filter(|c| c.featured).count();
        assert_eq!(featured, 1);
    }

    #[test]
    fn nav_links_are_fragment_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }
}
