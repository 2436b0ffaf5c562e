use async_trait::async_trait;
use std::sync::LazyLock;

use crate::domain::catalog::ResourceRepository;
use crate::domain::resource::{admit_records, Resource, ResourceInput};

fn seed(
    id: &str,
    title: &str,
    description: &str,
    source: &str,
    tags: &[&str],
    link: &str,
    category: &str,
) -> ResourceInput {
    ResourceInput {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        source: Some(source.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: Some(link.to_string()),
        category: Some(category.to_string()),
        ..Default::default()
    }
}

fn dated(
    mut input: ResourceInput,
    date_added: &str,
    rating: f64,
    image_url: Option<&str>,
) -> ResourceInput {
    input.date_added = Some(date_added.to_string());
    input.rating = Some(rating);
    input.image_url = image_url.map(str::to_string);
    input
}

fn sponsored(mut input: ResourceInput) -> ResourceInput {
    input.is_sponsored = Some(true);
    input
}

static SEED_RESOURCES: LazyLock<Vec<ResourceInput>> = LazyLock::new(|| {
    vec![
        // Technology
        dated(
            seed(
                "1",
                "freeCodeCamp - Full Stack Development",
                "Learn web development with comprehensive courses covering HTML, CSS, JavaScript, React, and more.",
                "freeCodeCamp",
                &["Programming", "Web Development", "Full Stack"],
                "https://www.freecodecamp.org/",
                "Technology",
            ),
            "2024-02-20",
            4.9,
            Some("https://images.unsplash.com/photo-1461749280684-dccba630e2f6"),
        ),
        dated(
            seed(
                "2",
                "The Odin Project",
                "Free full-stack curriculum from basics to advanced web development concepts.",
                "The Odin Project",
                &["Web Development", "JavaScript", "Ruby"],
                "https://www.theodinproject.com/",
                "Technology",
            ),
            "2024-02-19",
            4.8,
            Some("https://images.unsplash.com/photo-1498050108023-c5249f4df085"),
        ),
        dated(
            seed(
                "3",
                "MDN Web Docs",
                "Comprehensive documentation and learning resources for web technologies.",
                "Mozilla",
                &["Documentation", "Web Development", "Reference"],
                "https://developer.mozilla.org/",
                "Technology",
            ),
            "2024-02-18",
            4.9,
            Some("https://images.unsplash.com/photo-1488590528505-98d2b5aba04b"),
        ),
        // Design
        dated(
            seed(
                "4",
                "Figma Community Resources",
                "Free UI kits, design systems, and templates from the Figma community.",
                "Figma",
                &["UI/UX", "Design Systems", "Templates"],
                "https://www.figma.com/community",
                "Design",
            ),
            "2024-02-17",
            4.7,
            Some("https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d"),
        ),
        dated(
            seed(
                "5",
                "Dribbble - Design Inspiration",
                "Platform for designers to share their work and find inspiration.",
                "Dribbble",
                &["Design Inspiration", "UI/UX", "Graphics"],
                "https://dribbble.com/",
                "Design",
            ),
            "2024-02-16",
            4.6,
            Some("https://images.unsplash.com/photo-1434494878577-86c23bcb06b9"),
        ),
        // Business
        dated(
            seed(
                "6",
                "SCORE Business Templates",
                "Free business plan templates and financial planning resources.",
                "SCORE",
                &["Business Planning", "Templates", "Finance"],
                "https://www.score.org/resource/business-plan-template-startups",
                "Business",
            ),
            "2024-02-15",
            4.5,
            Some("https://images.unsplash.com/photo-1483058712412-4245e9b90334"),
        ),
        dated(
            seed(
                "7",
                "Google Digital Garage",
                "Free digital marketing and business courses from Google.",
                "Google",
                &["Digital Marketing", "Business", "Certification"],
                "https://learndigital.withgoogle.com/digitalgarage",
                "Business",
            ),
            "2024-02-14",
            4.8,
            Some("https://images.unsplash.com/photo-1460925895917-afdab827c52f"),
        ),
        // Education
        dated(
            seed(
                "8",
                "Khan Academy",
                "Free world-class education in math, science, and more.",
                "Khan Academy",
                &["Mathematics", "Science", "Learning"],
                "https://www.khanacademy.org/",
                "Education",
            ),
            "2024-02-13",
            4.9,
            Some("https://images.unsplash.com/photo-1517022812141-23620dba5c23"),
        ),
        dated(
            seed(
                "9",
                "Coursera",
                "Access to free courses from top universities worldwide.",
                "Coursera",
                &["Online Courses", "University", "Professional Development"],
                "https://www.coursera.org/courses?query=free",
                "Education",
            ),
            "2024-02-12",
            4.7,
            Some("https://images.unsplash.com/photo-1501504905252-473c47e087f8"),
        ),
        // Books
        dated(
            seed(
                "10",
                "Project Gutenberg",
                "Over 60,000 free eBooks to download or read online.",
                "Project Gutenberg",
                &["eBooks", "Literature", "Classic Books"],
                "https://www.gutenberg.org/",
                "Books",
            ),
            "2024-02-11",
            4.7,
            None,
        ),
        dated(
            seed(
                "11",
                "Open Library",
                "Millions of free books available to borrow digitally.",
                "Internet Archive",
                &["eBooks", "Digital Library", "Education"],
                "https://openlibrary.org/",
                "Books",
            ),
            "2024-02-10",
            4.6,
            Some("https://images.unsplash.com/photo-1481627834876-b7833e8f5570"),
        ),
        // Music
        dated(
            seed(
                "12",
                "Teoria - Music Theory",
                "Free music theory lessons and exercises.",
                "Teoria",
                &["Music Theory", "Exercises", "Education"],
                "https://www.teoria.com/",
                "Music",
            ),
            "2024-02-09",
            4.5,
            Some("https://images.unsplash.com/photo-1511379938547-c1f69419868d"),
        ),
        dated(
            seed(
                "13",
                "MuseScore Sheet Music",
                "Free sheet music and composition tools.",
                "MuseScore",
                &["Sheet Music", "Composition", "Music Tools"],
                "https://musescore.org/",
                "Music",
            ),
            "2024-02-08",
            4.7,
            Some("https://images.unsplash.com/photo-1507838153414-b4b713384a76"),
        ),
        dated(
            seed(
                "14",
                "Python Data Science Handbook",
                "Comprehensive guide to data analysis in Python with pandas, numpy, and matplotlib.",
                "GitHub",
                &["Python", "Data Science", "Programming"],
                "https://jakevdp.github.io/PythonDataScienceHandbook/",
                "Technology",
            ),
            "2024-02-07",
            4.8,
            Some("https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5"),
        ),
        dated(
            seed(
                "15",
                "Adobe Color Wheel",
                "Create color schemes and explore color theory with Adobe's professional tool.",
                "Adobe",
                &["Design", "Color Theory", "Tools"],
                "https://color.adobe.com/",
                "Design",
            ),
            "2024-02-06",
            4.7,
            Some("https://images.unsplash.com/photo-1513542789411-b6a5d4f31634"),
        ),
        dated(
            seed(
                "16",
                "Small Business Resource Center",
                "Free templates, guides, and resources for small business owners.",
                "SBA",
                &["Business Planning", "Entrepreneurship", "Resources"],
                "https://www.sba.gov/business-guide",
                "Business",
            ),
            "2024-02-05",
            4.6,
            Some("https://images.unsplash.com/photo-1454165804606-c3d57bc86b40"),
        ),
        dated(
            seed(
                "17",
                "MIT OpenCourseWare",
                "Free access to MIT course materials across various disciplines.",
                "MIT",
                &["Education", "University", "Learning"],
                "https://ocw.mit.edu/",
                "Education",
            ),
            "2024-02-04",
            4.9,
            Some("https://images.unsplash.com/photo-1434030216411-0b793f4b4173"),
        ),
        dated(
            seed(
                "18",
                "Internet Archive Books",
                "Millions of free books, texts, and other educational materials.",
                "Internet Archive",
                &["Books", "Education", "Digital Library"],
                "https://archive.org/details/texts",
                "Books",
            ),
            "2024-02-03",
            4.7,
            Some("https://images.unsplash.com/photo-1524995997946-a1c2e315a42f"),
        ),
        dated(
            seed(
                "19",
                "Musictheory.net",
                "Interactive music theory lessons and exercises.",
                "Musictheory.net",
                &["Music Theory", "Education", "Interactive"],
                "https://www.musictheory.net/",
                "Music",
            ),
            "2024-02-02",
            4.8,
            Some("https://images.unsplash.com/photo-1507838153414-b4b713384a76"),
        ),
        // Sponsored
        sponsored(dated(
            seed(
                "20",
                "Frontend Masters Free Courses",
                "Free introductory courses on JavaScript, CSS, and Git from industry experts.",
                "Frontend Masters",
                &["JavaScript", "Web Development", "Video Courses"],
                "https://frontendmasters.com/learn/",
                "Sponsored",
            ),
            "2024-02-01",
            4.8,
            Some("https://images.unsplash.com/photo-1517694712202-14dd9538aa97"),
        )),
        sponsored(dated(
            seed(
                "21",
                "DigitalOcean Community Tutorials",
                "Thousands of tutorials on Linux, databases, and cloud infrastructure.",
                "DigitalOcean",
                &["Cloud", "Linux", "Tutorials"],
                "https://www.digitalocean.com/community/tutorials",
                "Sponsored",
            ),
            "2024-01-31",
            4.6,
            None,
        )),
    ]
});

/// Serves a fixed collection held in memory. Without explicit records it
/// serves the built-in seed catalog.
pub struct StaticResourceRepository {
    records: Vec<ResourceInput>,
}

impl StaticResourceRepository {
    pub fn new() -> Self {
        Self::with_records(SEED_RESOURCES.clone())
    }

    pub fn with_records(records: Vec<ResourceInput>) -> Self {
        Self { records }
    }
}

impl Default for StaticResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceRepository for StaticResourceRepository {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Resource>> {
        Ok(admit_records(self.records.iter().cloned()))
    }
}
