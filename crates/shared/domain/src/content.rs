//! Static page content. Consumed as immutable input by the page components.

use serde::{Deserialize, Serialize};

/// A showcased project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Ordered technology tags shown as chips.
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
}

/// A group of skills under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    /// Decorative glyph rendered next to the category.
    pub icon: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Hero copy and portrait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub eyebrow: String,
    pub tagline: String,
    pub role: String,
    pub summary: String,
    pub bio: String,
    pub availability: String,
    pub photo: String,
    pub photo_alt: String,
}

/// Contact block copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub intro: String,
    pub status: String,
    pub message: String,
    pub email: String,
    pub closing: String,
}

/// Footer link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Project {
    fn new(title: &str, description: &str, tech: &[&str], link: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            tech: tech.iter().map(|&t| t.to_owned()).collect(),
            link: link.to_owned(),
        }
    }

    /// The projects shown when no content file overrides them.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Veilscope",
                "Web application and marketing website for an AI investment algorithm.",
                &["Next.js", "Web Application", "Investing"],
                "https://veilscope.com",
            ),
            Self::new(
                "Local Network Chat App",
                "Local network chat application enabling real-time messaging without internet access.",
                &["React", "Node.js", "PostgreSQL"],
                "https://github.com/brodyBroughton/simple-local-network-chat-app",
            ),
            Self::new(
                "Note Taking App",
                "Simple shell script-based note-taking application for quick and easy note management in terminal.",
                &["Shell", "Linux", "Bash"],
                "https://github.com/brodyBroughton/note-to-shelf-brodyBroughton",
            ),
        ]
    }
}

impl SkillGroup {
    fn new(category: &str, icon: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_owned(),
            icon: icon.to_owned(),
            items: items.iter().map(|&i| i.to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Frontend",
                "💻",
                &["React", "Next.js", "TypeScript", "Tailwind CSS", "HTML5", "CSS3"],
            ),
            Self::new("Backend", "🧠", &["Node.js", "Express", "REST APIs"]),
            Self::new("Tools & Other", "🛠️", &["Git & GitHub", "VS Code", "Figma", "Vercel"]),
        ]
    }
}

impl SocialLink {
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self { label: "GitHub".to_owned(), url: "https://github.com/brodyBroughton".to_owned() },
            Self {
                label: "LinkedIn".to_owned(),
                url: "https://www.linkedin.com/in/brodybroughton/".to_owned(),
            },
        ]
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Brody Broughton".to_owned(),
            eyebrow: "Portfolio".to_owned(),
            tagline: "Frontend Developer · Student".to_owned(),
            role: "frontend developer".to_owned(),
            summary: "who enjoys building clean, performant, and user-friendly web experiences \
                      with React & Next.js."
                .to_owned(),
            bio: "Student at Jeffco Virtual Academy and the Warren Tech Computer Science and \
                  Cybersecurity program. Passionate about coding, technology, and continuous \
                  learning, and actively exploring opportunities to apply my skills in \
                  real-world projects."
                .to_owned(),
            availability: "Currently open to opportunities where I can grow as a developer and \
                           contribute to meaningful products."
                .to_owned(),
            photo: "/profile.jpeg".to_owned(),
            photo_alt: "Professional headshot of Brody Broughton".to_owned(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            intro: "Want to get in contact? I'd be happy to connect.".to_owned(),
            status: "Open to opportunities".to_owned(),
            message: "The best way to reach me is by email. Feel free to get in touch with \
                      questions, collaboration ideas, or opportunities. You can contact me at:"
                .to_owned(),
            email: "broughton.brody07@gmail.com".to_owned(),
            closing: "I aim to respond as soon as possible and appreciate your interest in \
                      connecting."
                .to_owned(),
        }
    }
}
