//! モック求人データ
//!
//! 画面確認用の固定5件。ソースに埋め込まれた不変リテラルで、
//! 追加・更新・削除の経路はない。

use crate::types::{EmploymentType, Listing, WorkArrangement};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// シード求人を返す（id 1〜5）
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Senior Security Engineer".into(),
            company: "CyberShield Inc.".into(),
            logo: "CS".into(),
            location: "San Francisco, CA".into(),
            work_arrangement: WorkArrangement::Remote,
            employment_type: EmploymentType::FullTime,
            salary: "$150k - $200k".into(),
            experience: "5+ years".into(),
            posted: "2 days ago".into(),
            applicants: 45,
            match_percentage: 95,
            featured: true,
            tags: strings(&["Security", "Cloud", "Penetration Testing", "SIEM"]),
            description: "Lead the protection of our cloud platform, from threat modelling \
                new services to running incident response for production systems."
                .into(),
            requirements: strings(&[
                "5+ years in application or infrastructure security",
                "Hands-on penetration testing experience",
                "Familiarity with SIEM tooling and log analysis",
                "Security certification (OSCP, CISSP) preferred",
            ]),
            responsibilities: strings(&[
                "Run threat modelling for new services",
                "Own the vulnerability management program",
                "Coordinate incident response",
                "Mentor engineers on secure coding",
            ]),
        },
        Listing {
            id: 2,
            title: "Full Stack Developer".into(),
            company: "TechFlow Solutions".into(),
            logo: "TF".into(),
            location: "New York, NY".into(),
            work_arrangement: WorkArrangement::Hybrid,
            employment_type: EmploymentType::FullTime,
            salary: "$120k - $160k".into(),
            experience: "3-5 years".into(),
            posted: "1 week ago".into(),
            applicants: 128,
            match_percentage: 88,
            featured: true,
            tags: strings(&["React", "Node.js", "TypeScript", "PostgreSQL"]),
            description: "Build customer-facing features end to end across a React \
                front end and a Node.js API."
                .into(),
            requirements: strings(&[
                "3+ years with React and TypeScript",
                "Experience designing REST APIs in Node.js",
                "Comfortable with relational databases",
            ]),
            responsibilities: strings(&[
                "Ship features across the stack",
                "Review pull requests",
                "Improve test coverage and release tooling",
            ]),
        },
        Listing {
            id: 3,
            title: "DevOps Engineer".into(),
            company: "CloudNine Systems".into(),
            logo: "CN".into(),
            location: "Austin, TX".into(),
            work_arrangement: WorkArrangement::Remote,
            employment_type: EmploymentType::FullTime,
            salary: "$130k - $170k".into(),
            experience: "4+ years".into(),
            posted: "3 days ago".into(),
            applicants: 67,
            match_percentage: 92,
            featured: false,
            tags: strings(&["Kubernetes", "AWS", "Terraform", "CI/CD"]),
            description: "Scale and automate the infrastructure behind our hosting \
                platform."
                .into(),
            requirements: strings(&[
                "Production Kubernetes experience",
                "Infrastructure as code with Terraform",
                "Solid Linux fundamentals",
            ]),
            responsibilities: strings(&[
                "Maintain CI/CD pipelines",
                "Operate Kubernetes clusters on AWS",
                "Drive observability improvements",
            ]),
        },
        Listing {
            id: 4,
            title: "Backend Engineer".into(),
            company: "DataStream Labs".into(),
            logo: "DS".into(),
            location: "Seattle, WA".into(),
            work_arrangement: WorkArrangement::Remote,
            employment_type: EmploymentType::Contract,
            salary: "$90 - $120/hr".into(),
            experience: "3+ years".into(),
            posted: "5 days ago".into(),
            applicants: 34,
            match_percentage: 85,
            featured: false,
            tags: strings(&["Rust", "Go", "PostgreSQL", "Microservices"]),
            description: "Design and build high-throughput services for our streaming \
                data pipeline."
                .into(),
            requirements: strings(&[
                "Strong Rust or Go experience",
                "Distributed systems background",
                "Experience tuning PostgreSQL",
            ]),
            responsibilities: strings(&[
                "Build ingestion microservices",
                "Own service reliability targets",
                "Write design documents for new components",
            ]),
        },
        Listing {
            id: 5,
            title: "Frontend Developer".into(),
            company: "PixelPerfect Studio".into(),
            logo: "PP".into(),
            location: "Los Angeles, CA".into(),
            work_arrangement: WorkArrangement::OnSite,
            employment_type: EmploymentType::PartTime,
            salary: "$80k - $100k".into(),
            experience: "2-4 years".into(),
            posted: "1 day ago".into(),
            applicants: 89,
            match_percentage: 78,
            featured: false,
            tags: strings(&["React", "TypeScript", "CSS", "Figma"]),
            description: "Turn design mockups into polished, accessible interfaces for \
                agency clients."
                .into(),
            requirements: strings(&[
                "2+ years building React applications",
                "Eye for detail in layout and typography",
                "Experience working from Figma designs",
            ]),
            responsibilities: strings(&[
                "Implement UI components",
                "Collaborate with designers",
                "Keep the component library consistent",
            ]),
        },
    ]
}
