//! Literal content of the portfolio overlays.

use super::catalog::ContentTable;
use super::content::{GlossaryEntry, OverlayContent, OverlayStyle, Section};
use super::topics::{ContentTableId, GLOSSARY_KEY};
use crate::domain::b001_page::PageId;

pub(super) fn tables() -> Vec<ContentTable> {
    vec![
        glossary(),
        about_me(),
        about_full(),
        journey(),
        skills(),
        skill_details(),
        projects(),
        project_details(),
        web_dev(),
        web_dev_details(),
        design(),
        design_details(),
    ]
}

fn glossary() -> ContentTable {
    let entries = [
        ("Contents", "1", "contents"),
        ("About Me", "2", "about-me"),
        ("My Journey", "3", "my-journey"),
        ("Skills", "4", "skills"),
        ("Projects", "5", "projects"),
        ("Web Development", "6", "web-development"),
        ("Design Portfolio", "7", "design-portfolio"),
        ("Achievements", "8", "achievements"),
        ("Testimonials", "9", "testimonials"),
        ("Contact & Links", "10", "contact-links"),
    ]
    .into_iter()
    .map(|(text, page, id)| GlossaryEntry {
        text: text.to_string(),
        page_label: page.to_string(),
        page_id: PageId::new(id),
    })
    .collect();

    ContentTable::new(
        ContentTableId::Glossary,
        vec![(GLOSSARY_KEY, OverlayContent::glossary("Contents", entries))],
    )
}

fn about_me() -> ContentTable {
    let about = |title, items: &[&str]| OverlayContent::bullets(OverlayStyle::About, title, items);
    ContentTable::new(
        ContentTableId::AboutMe,
        vec![
            (
                "web-development",
                about(
                    "Web Development",
                    &[
                        "Full-Stack Development with modern frameworks",
                        "React, Vue.js, Angular for dynamic frontends",
                        "Node.js, Express, PHP for robust backends",
                        "Database design with MySQL, MongoDB",
                        "API development and integration",
                        "Progressive Web Apps (PWAs)",
                        "E-commerce solutions with WooCommerce, Shopify",
                    ],
                ),
            ),
            (
                "ui-design",
                about(
                    "UI/UX Design",
                    &[
                        "User-centered design approach",
                        "Wireframing and prototyping with Figma",
                        "Responsive design for all devices",
                        "Design systems and component libraries",
                        "Accessibility-first design principles",
                        "User research and usability testing",
                        "Brand identity and visual design",
                    ],
                ),
            ),
            (
                "location",
                about(
                    "Bangkok, Thailand",
                    &[
                        "Based in the vibrant tech hub of Southeast Asia",
                        "Working with international clients globally",
                        "Available for remote collaboration",
                        "UTC+7 timezone (flexible hours)",
                        "Fluent in English and Thai",
                        "Understanding of diverse cultural contexts",
                        "Local market knowledge for APAC projects",
                    ],
                ),
            ),
            (
                "frontend",
                about(
                    "Frontend Development",
                    &[
                        "Modern JavaScript (ES6+, TypeScript)",
                        "React.js with hooks and context",
                        "Vue.js 3 with Composition API",
                        "CSS3, Sass, Tailwind CSS",
                        "Responsive design and mobile-first approach",
                        "Performance optimization and lazy loading",
                        "Cross-browser compatibility testing",
                    ],
                ),
            ),
            (
                "backend",
                about(
                    "Backend Development",
                    &[
                        "Node.js and Express.js APIs",
                        "PHP with Laravel and CodeIgniter",
                        "RESTful API design and development",
                        "Database design and optimization",
                        "Authentication and security implementation",
                        "Server deployment and maintenance",
                        "Cloud services (AWS, Google Cloud)",
                    ],
                ),
            ),
            (
                "seo",
                about(
                    "SEO Optimization",
                    &[
                        "Technical SEO audit and implementation",
                        "On-page optimization strategies",
                        "Core Web Vitals improvement",
                        "Schema markup and structured data",
                        "Site speed optimization",
                        "Mobile-first indexing preparation",
                        "Analytics setup and monitoring",
                    ],
                ),
            ),
            (
                "clean-code",
                about(
                    "Clean Code Practices",
                    &[
                        "Readable and maintainable code structure",
                        "SOLID principles and design patterns",
                        "Code documentation and commenting",
                        "Version control with Git best practices",
                        "Automated testing (unit, integration)",
                        "Code review and refactoring",
                        "Continuous integration/deployment",
                    ],
                ),
            ),
            (
                "ux",
                about(
                    "User Experience",
                    &[
                        "User journey mapping and optimization",
                        "Conversion rate optimization (CRO)",
                        "A/B testing and data-driven decisions",
                        "Loading performance optimization",
                        "Intuitive navigation design",
                        "Error handling and user feedback",
                        "Accessibility compliance (WCAG 2.1)",
                    ],
                ),
            ),
        ],
    )
}

fn heading_text(pairs: &[(&str, &str)]) -> Vec<Section> {
    pairs
        .iter()
        .map(|(heading, text)| Section::new().heading(heading).text(text))
        .collect()
}

fn about_full() -> ContentTable {
    let sections = heading_text(&[
        (
            "Professional Overview",
            "I'm a passionate freelance web developer and UI designer based in the vibrant city of Bangkok, Thailand. With over 5 years of experience in the industry, I specialize in creating responsive, user-focused websites that seamlessly blend clean design with robust functionality.",
        ),
        (
            "Technical Expertise",
            "My technical stack spans both front-end and back-end development. I work with modern frameworks like React, Vue.js, and Angular for dynamic user interfaces, while leveraging Node.js, PHP, and Laravel for server-side solutions. I'm also proficient in database design, API development, and cloud deployment.",
        ),
        (
            "Design Philosophy",
            "I believe in user-centered design that prioritizes accessibility, performance, and intuitive navigation. Every project starts with understanding the user's needs and business goals, then translating those into pixel-perfect interfaces that drive engagement and conversions.",
        ),
        (
            "Core Values",
            "Clean code, SEO optimization, and exceptional user experiences are at the heart of everything I build. I focus on creating solutions that are not just visually appealing, but also maintainable, scalable, and optimized for search engines and performance.",
        ),
        (
            "Global Collaboration",
            "Working remotely from Bangkok, I collaborate with clients across different time zones and cultures. This has given me valuable insights into diverse market needs and the ability to create solutions that work for global audiences.",
        ),
        (
            "Continuous Growth",
            "The tech industry evolves rapidly, and I stay current with the latest trends, frameworks, and best practices. I'm always learning new technologies and methodologies to deliver cutting-edge solutions for my clients.",
        ),
    ]);

    ContentTable::new(
        ContentTableId::AboutFull,
        vec![(
            "about-me-full",
            OverlayContent::sections(OverlayStyle::Full, "About Leya Thaobunyuen", sections)
                .with_footer("Ready to bring your ideas to life? Let's collaborate!"),
        )],
    )
}

fn journey() -> ContentTable {
    let sections = heading_text(&[
        (
            "The Beginning",
            "From curiosity to code, my journey into tech was never just about websites—it's about creating experiences that connect people.",
        ),
        (
            "Visual Foundation",
            "I started as someone who loved visuals: color palettes, clean layouts, and the way a good design just feels right. But as I explored more, I realized that design alone wasn't enough—I wanted to build the logic behind it too. That's where development came in.",
        ),
        (
            "Learning & Growing",
            "Learning HTML, CSS, and JavaScript opened the doors, and from there, I dove deeper into full-stack web development. The more I learned, the more I wanted to push boundaries and create something meaningful.",
        ),
        (
            "Real-World Impact",
            "Over the years, I've built responsive blogs, landing pages with real conversion impact, and full custom CMS-powered sites that clients can manage on their own. I've worked remotely with teams and individuals across different industries, helping them bring their online presence to life with clean, SEO-optimized, and user-friendly websites.",
        ),
        (
            "Continuous Learning",
            "Every project taught me something—whether it was optimizing performance, debugging an impossible issue, or understanding how users actually interact with a page. And that's what I love about this field—it constantly pushes me to learn, adapt, and improve.",
        ),
        (
            "Present & Future",
            "Today, I combine design, code, and strategy to create digital spaces that are both functional and beautiful. I'm passionate about building sites that don't just look good but work great—on every screen, for every user.",
        ),
        (
            "The Journey Continues",
            "The journey's still ongoing, and I'm excited for what comes next. Every day brings new challenges, technologies to explore, and opportunities to create something that makes a difference.",
        ),
    ]);

    ContentTable::new(
        ContentTableId::Journey,
        vec![(
            "my-journey-full",
            OverlayContent::sections(OverlayStyle::Journey, "My Journey Into Tech", sections)
                .with_footer("\"Building the web, one experience at a time.\""),
        )],
    )
}

/// (key, name, description, tools)
const SKILLS: [(&str, &str, &str, &str); 6] = [
    (
        "web-development",
        "Web Development",
        "I build responsive, user-friendly websites using clean HTML, modern CSS (Tailwind CSS is my go-to), and dynamic JavaScript. Whether it's a landing page or a full system, I always prioritize performance and accessibility.",
        "HTML5, CSS3, Tailwind CSS, JavaScript (ES6+), PHP, Python",
    ),
    (
        "backend-fullstack",
        "Back-End & Full Stack",
        "I don't just stop at the front. I develop full-stack apps with solid back-end logic, database integration, and RESTful APIs. I make sure the system behind the scenes runs just as smoothly as what users see.",
        "Node.js, PHP, Python, MySQL, Express.js, REST API integration",
    ),
    (
        "ui-ux-design",
        "UI/UX Design",
        "Design is more than just visuals—it's about how users feel when they interact with your site. I create intuitive layouts, smooth animations, and clear navigation to guide users effortlessly.",
        "Responsive Design, Mobile-First Approach, Clean Layouts, Call-to-Action Flow, Accessibility",
    ),
    (
        "seo-optimization",
        "SEO & Optimization",
        "I optimize websites from the ground up—faster loading times, mobile responsiveness, and SEO best practices baked into the code. I use data to make design decisions that improve ranking and engagement.",
        "Meta Tag Structuring, Keyword Planning, Lighthouse Audits, Page Speed Optimization, Google Analytics Integration",
    ),
    (
        "version-control",
        "Version Control & Workflow",
        "I use Git and GitHub to keep my workflow organized, especially when collaborating with other devs or managing feature updates. I believe in writing maintainable, well-documented code.",
        "Git, GitHub, VS Code, Trello, Figma (for collab)",
    ),
    (
        "soft-skills",
        "Soft Skills",
        "Technical skills are only half the game—I bring clear communication, deadline discipline, and a genuine collaborative mindset to every project. I'm easy to work with, detail-oriented, and always hungry to learn more.",
        "Communication, Project Management, Problem Solving, Continuous Learning",
    ),
];

fn skills() -> ContentTable {
    let sections = SKILLS
        .iter()
        .map(|(_, name, description, tools)| {
            Section::new()
                .heading(name)
                .text(description)
                .detail("Tools I use:", tools)
        })
        .collect();
    ContentTable::new(
        ContentTableId::Skills,
        vec![(
            "skills-full",
            OverlayContent::sections(OverlayStyle::Skills, "Skills & Expertise", sections),
        )],
    )
}

fn skill_details() -> ContentTable {
    let rows = SKILLS
        .iter()
        .map(|(key, name, description, tools)| {
            let section = Section::new()
                .text(description)
                .detail("Tools & Focus Areas:", tools);
            (*key, OverlayContent::sections(OverlayStyle::Skills, name, vec![section]))
        })
        .collect();
    ContentTable::new(ContentTableId::SkillDetail, rows)
}

struct Project {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    technologies: &'static str,
    links: [(&'static str, &'static str); 2],
}

const PROJECTS: [Project; 2] = [
    Project {
        key: "project-1",
        name: "Blog Website with Admin Dashboard",
        description: "A full-featured blog website with admin dashboard and editor created using React.js. Features include content management, user authentication, comment/reply functionality, and SEO optimization for better search engine ranking.",
        technologies: "React.js, Node.js, Express, MongoDB, JWT, SEO Tools",
        links: [
            ("Visit Website", "https://letsgetunstuck.blog/"),
            ("Learn More", "https://letsgetunstuck.blog/"),
        ],
    },
    Project {
        key: "project-2",
        name: "E-Commerce Shopify Website",
        description: "A modern e-commerce website built on the Shopify platform. Features include product catalog, shopping cart, secure payment processing, inventory management, and responsive design for optimal user experience.",
        technologies: "Shopify, Liquid, JavaScript, CSS, Payment Gateway Integration",
        links: [
            ("Visit Store", "https://realafcollection.com/"),
            ("Shop Now", "https://realafcollection.com/"),
        ],
    },
];

fn project_section(project: &Project, heading: bool, tech_label: &str) -> Section {
    let mut section = Section::new();
    if heading {
        section = section.heading(project.name);
    }
    let mut section = section
        .text(project.description)
        .detail(tech_label, project.technologies);
    for (label, url) in project.links {
        section = section.link(label, url);
    }
    section
}

fn projects() -> ContentTable {
    let sections = PROJECTS
        .iter()
        .map(|p| project_section(p, true, "Technologies:"))
        .collect();
    ContentTable::new(
        ContentTableId::Projects,
        vec![(
            "projects-full",
            OverlayContent::sections(OverlayStyle::Projects, "Projects", sections),
        )],
    )
}

fn project_details() -> ContentTable {
    let rows = PROJECTS
        .iter()
        .map(|p| {
            let section = project_section(p, false, "Technologies Used:");
            (p.key, OverlayContent::sections(OverlayStyle::Projects, p.name, vec![section]))
        })
        .collect();
    ContentTable::new(ContentTableId::ProjectDetail, rows)
}

fn web_dev() -> ContentTable {
    let sections = [
        (
            "Frontend Development",
            "Creating stunning, interactive user interfaces using modern frameworks and libraries. I specialize in React.js, vanilla JavaScript, and responsive CSS to bring designs to life.",
            "React.js, JavaScript (ES6+), HTML5, CSS3, Tailwind CSS, Bootstrap",
        ),
        (
            "Backend Development",
            "Building robust server-side applications and APIs that power web applications. I work with Node.js, PHP, and Python to create scalable backend solutions.",
            "Node.js, Express.js, PHP, Python, RESTful APIs, Database Integration",
        ),
        (
            "Full Stack Solutions",
            "End-to-end web application development from concept to deployment. I handle both frontend and backend development to deliver complete web solutions.",
            "MERN Stack, LAMP Stack, Database Design, API Development, Deployment",
        ),
        (
            "Responsive Design",
            "Creating websites that work perfectly across all devices and screen sizes. Mobile-first approach ensures optimal user experience everywhere.",
            "CSS Grid, Flexbox, Media Queries, Mobile-First Design, Cross-Browser Testing",
        ),
        (
            "Performance Optimization",
            "Optimizing websites for speed, SEO, and user experience. I focus on fast loading times, clean code, and search engine optimization.",
            "Lighthouse Audits, SEO Best Practices, Code Optimization, Image Compression",
        ),
    ]
    .into_iter()
    .map(|(name, description, tools)| {
        Section::new()
            .heading(name)
            .text(description)
            .detail("Technologies & Tools:", tools)
    })
    .collect();

    ContentTable::new(
        ContentTableId::WebDev,
        vec![(
            "web-dev-full",
            OverlayContent::sections(OverlayStyle::WebDev, "Web Development Expertise", sections),
        )],
    )
}

fn web_dev_details() -> ContentTable {
    let rows = [
        (
            "frontend",
            "Frontend Development",
            "Creating stunning, interactive user interfaces using modern frameworks and libraries. I specialize in React.js, vanilla JavaScript, and responsive CSS to bring designs to life with smooth animations and optimal user experience.",
            "React.js, JavaScript (ES6+), HTML5, CSS3, Tailwind CSS, Bootstrap, GSAP, CSS Animations",
        ),
        (
            "backend",
            "Backend Development",
            "Building robust server-side applications and APIs that power web applications. I work with Node.js, PHP, and Python to create scalable backend solutions with secure authentication and efficient database management.",
            "Node.js, Express.js, PHP, Python, MySQL, MongoDB, JWT Authentication, RESTful APIs",
        ),
        (
            "fullstack",
            "Full Stack Solutions",
            "End-to-end web application development from concept to deployment. I handle both frontend and backend development, database design, and deployment to deliver complete, production-ready web solutions.",
            "MERN Stack, LAMP Stack, Database Design, API Development, Git, Docker, AWS, Deployment",
        ),
        (
            "responsive",
            "Responsive Design",
            "Creating websites that work perfectly across all devices and screen sizes. I use mobile-first approach with modern CSS techniques to ensure optimal user experience on desktop, tablet, and mobile devices.",
            "CSS Grid, Flexbox, Media Queries, Mobile-First Design, Cross-Browser Testing, Viewport Optimization",
        ),
        (
            "performance",
            "Performance Optimization",
            "Optimizing websites for speed, SEO, and user experience. I focus on fast loading times, clean code structure, image optimization, and search engine optimization to ensure websites perform at their best.",
            "Lighthouse Audits, SEO Best Practices, Code Minification, Image Compression, Caching Strategies",
        ),
    ]
    .into_iter()
    .map(|(key, name, description, tools)| {
        let section = Section::new()
            .text(description)
            .detail("Technologies & Tools:", tools);
        (key, OverlayContent::sections(OverlayStyle::WebDev, name, vec![section]))
    })
    .collect();
    ContentTable::new(ContentTableId::WebDevDetail, rows)
}

fn design() -> ContentTable {
    let sections = heading_text(&[
        (
            "Creative Vision",
            "I believe design is more than aesthetics—it's about solving problems through visual storytelling. Each project reflects my commitment to creating meaningful connections between brands and their audiences through thoughtful, strategic design solutions.",
        ),
        (
            "Design Philosophy",
            "My approach combines minimalist principles with purposeful functionality. I focus on clean typography, intentional color choices, and user-centered layouts that communicate effectively across all mediums and platforms.",
        ),
        (
            "Design Process",
            "From concept to completion, I follow a structured approach: research and discovery, ideation and sketching, digital design and iteration, client feedback and refinement, and final delivery with brand guidelines.",
        ),
    ]);
    ContentTable::new(
        ContentTableId::Design,
        vec![(
            "design-portfolio-full",
            OverlayContent::sections(OverlayStyle::Design, "Design Portfolio", sections),
        )],
    )
}

fn design_details() -> ContentTable {
    let rows = [
        (
            "ui-ux",
            "UI/UX Design",
            "Creating intuitive and engaging user experiences through research-driven design. I focus on user journey mapping, wireframing, prototyping, and usability testing to ensure every interface is both beautiful and functional.",
            "Figma, Adobe XD, Sketch, InVision, Principle, Miro, UserTesting",
        ),
        (
            "branding",
            "Brand Identity",
            "Developing comprehensive brand identities that capture the essence of businesses and resonate with target audiences. From logo design to complete brand guidelines, I create cohesive visual systems.",
            "Adobe Illustrator, Photoshop, InDesign, Brand guidelines, Logo design, Color theory",
        ),
        (
            "graphic",
            "Graphic Design",
            "Crafting compelling visual communications for both digital and print media. My work spans from marketing materials and social media graphics to editorial design and packaging concepts.",
            "Adobe Creative Suite, Canva Pro, Typography, Layout design, Color theory, Print production",
        ),
        (
            "digital",
            "Digital Art",
            "Creating original digital artwork and illustrations that enhance brand storytelling. I work with various digital art techniques to produce unique visuals for web, mobile, and marketing applications.",
            "Adobe Illustrator, Photoshop, Procreate, Digital illustration, Vector art, Photo manipulation",
        ),
        (
            "print",
            "Print Design",
            "Designing for traditional print media with careful attention to typography, layout, and production requirements. My print work includes brochures, posters, business cards, and editorial layouts.",
            "InDesign, Illustrator, Print production, Typography, CMYK color, Prepress workflow",
        ),
        (
            "wireframes",
            "Wireframes & Prototypes",
            "Building detailed wireframes and interactive prototypes to visualize user flows and test design concepts before development. This process ensures optimal user experience and reduces development time.",
            "Figma, Adobe XD, Balsamiq, Axure, InVision, Principle, Interactive prototyping",
        ),
        (
            "visual",
            "Visual Communication",
            "Developing strategic visual communications that effectively convey messages across different platforms and audiences. I focus on creating cohesive visual narratives that align with brand objectives.",
            "Design systems, Style guides, Visual hierarchy, Information design, Infographics, Presentation design",
        ),
    ]
    .into_iter()
    .map(|(key, name, description, tools)| {
        let section = Section::new()
            .text(description)
            .detail("Tools & Technologies:", tools);
        (key, OverlayContent::sections(OverlayStyle::Design, name, vec![section]))
    })
    .collect();
    ContentTable::new(ContentTableId::DesignDetail, rows)
}
