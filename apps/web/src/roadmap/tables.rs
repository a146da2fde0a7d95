//! Hand-authored roadmap content. Pure reference data.

/// A named stage of a roadmap and its milestones, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub name: &'static str,
    pub milestones: &'static [&'static str],
}

/// Roadmap keyed by a career name or a domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapEntry {
    pub key: &'static str,
    pub phases: &'static [RoadmapPhase],
}

/// Career-specific roadmaps, keyed by catalog career name.
pub static CAREER_ROADMAPS: &[RoadmapEntry] = &[
    RoadmapEntry {
        key: "Software Engineer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Master Logic & DSAs",
                    "Learn Python/Java",
                    "OS & Networking Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Backend (Node/Django)",
                    "Frontend (React)",
                    "Database (SQL/NoSQL)",
                    "Git/GitHub",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Developer",
                    "Associate Engineer",
                    "Backend Trainee",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Dev",
                    "System Architect",
                    "VP of Engineering",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Data Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Advanced Excel",
                    "Statistics",
                    "Data Interpretation",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "SQL (Complex Joins)",
                    "Python (Pandas/NumPy)",
                    "BI Tools (Tableau/Power BI)",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Analyst",
                    "Reporting Executive",
                    "Business Analyst Trainee",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Lead Analyst",
                    "Data Scientist",
                    "Analytics Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Product Manager (Tech)",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Product Life Cycle",
                    "Market Research",
                    "Agile/Scrum Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Wireframing (Figma)",
                    "Jira/Confluence",
                    "User Interview Techniques",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Associate PM",
                    "Product Coordinator",
                    "Business Analyst",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior PM",
                    "Head of Product",
                    "Chief Product Officer (CPO)",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "QA / Test Engineer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "SDLC & STLC Models",
                    "Manual Testing Basics",
                    "Bug Life Cycle",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Selenium/Cypress",
                    "API Testing (Postman)",
                    "Performance Testing (JMeter)",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "QA Analyst",
                    "Junior Test Engineer",
                    "Manual Tester",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Automation Architect",
                    "QA Lead",
                    "SDET Manager",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Business Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Requirements Gathering",
                    "Documentation (BRD/FRD)",
                    "Flowcharting (Visio)",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "SQL Basics",
                    "Stakeholder Management",
                    "Gap Analysis",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior BA",
                    "Ops Analyst",
                    "Functional Consultant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Consultant",
                    "Product Owner",
                    "Operations Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Operations Manager",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Process Mapping",
                    "Supply Chain Basics",
                    "Team Management",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Six Sigma (Green Belt)",
                    "ERP Systems (SAP/Oracle)",
                    "Project Management",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Operations Executive",
                    "Shift Supervisor",
                    "Process Coordinator",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "General Manager",
                    "COO (Chief Operating Officer)",
                    "Regional Head",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Management Consultant",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Case Study Analysis",
                    "Business Strategy",
                    "Economics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Market Entry Frameworks",
                    "MECE Principle",
                    "Financial Modeling",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Analyst",
                    "Associate Consultant",
                    "Junior Researcher",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Engagement Manager",
                    "Partner",
                    "Managing Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Entrepreneur (Early-stage)",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Lean Startup Methodology",
                    "Ideation",
                    "Market Validation",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Fundraising (Pitching)",
                    "MVP Development",
                    "Sales & Networking",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Solo Founder",
                    "Bootstrapped Startup Owner",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Scale-up CEO",
                    "Serial Entrepreneur",
                    "Venture Partner",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "UI/UX Designer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Design Thinking",
                    "Color Theory",
                    "Typography",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Figma/Adobe XD",
                    "User Flows",
                    "Prototyping & Handoff",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior UI/UX Designer",
                    "Visual Designer",
                    "Product Design Intern",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "UX Architect",
                    "Design Lead",
                    "Director of UX",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Graphic Designer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Visual Composition",
                    "Branding Basics",
                    "Sketching",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Adobe Creative Suite",
                    "Motion Graphics",
                    "3D Modeling Basics",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Graphic Designer",
                    "Creative Assistant",
                    "Brand Designer",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Art Director",
                    "Creative Director",
                    "Studio Head",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Content Strategist / Copywriter",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Writing Fundamentals",
                    "Storytelling",
                    "SEO Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Content Auditing",
                    "Social Media Strategy",
                    "Ads Copywriting",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Writer",
                    "Content Coordinator",
                    "Social Media Executive",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Editorial Director",
                    "Content Head",
                    "Brand Strategist",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Digital Media Specialist",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Platform Algorithms",
                    "Digital Advertising Basics",
                    "Creative Writing",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Video Editing (Premiere Pro)",
                    "Campaign Optimization",
                    "Analytics Monitoring",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Media Executive",
                    "Content Creator",
                    "Campaign Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Digital Strategy Head",
                    "Media Director",
                    "Marketing Lead",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Fashion Designer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Textile Science",
                    "Draping",
                    "Fashion Illustration",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Pattern Making",
                    "Trend Forecasting",
                    "Apparel CAD",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Assistant Designer",
                    "Merchandiser",
                    "Pattern Maker",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Fashion Director",
                    "Brand Owner",
                    "Creative Lead (Apparel)",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Textile Designer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Fiber & Yarn Science",
                    "Weaving",
                    "Surface Design",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Dyeing Techniques",
                    "Print Design (CAD)",
                    "Knitting Tech",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Textile Designer",
                    "Quality Controller",
                    "Print Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Designer",
                    "Sourcing Manager",
                    "Textile Consultant",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Architect",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Architectural History",
                    "Engineering Math",
                    "Design Principles",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "AutoCAD/Revit/BIM",
                    "Structural Design",
                    "Building Codes & Sustainability",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Architect",
                    "BIM Modeler",
                    "Site Supervisor",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Principal Architect",
                    "Urban Planner",
                    "Studio Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Interior Designer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Space Planning",
                    "Material Knowledge",
                    "Lighting Design",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "3ds Max/Sketchup",
                    "Client Presentations",
                    "Furniture Sourcing",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Decorator",
                    "Space Planner",
                    "Design Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Designer",
                    "Design Director",
                    "Studio Owner",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Financial Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Corporate Finance",
                    "Micro/Macro Economics",
                    "Excel",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Financial Modeling",
                    "Valuation (DCF)",
                    "Technical Analysis",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Analyst",
                    "FP&A Associate",
                    "Treasury Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Finance Manager",
                    "CFO",
                    "Portfolio Manager",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Chartered Accountant (CA)",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Accounting Standards",
                    "Corporate Laws",
                    "Taxation Principles",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Statutory Audit",
                    "Indirect Tax (GST)",
                    "Advanced Compliance",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Articled Assistant",
                    "Audit Associate",
                    "Accountant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Partner at Audit Firm",
                    "Internal Audit Head",
                    "Finance Controller",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Investment Banking Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "M&A Basics",
                    "Securities Market",
                    "Capital Budgeting",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Pitch Deck Creation",
                    "LBO Modeling",
                    "Due Diligence",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "IB Analyst",
                    "Transaction Associate",
                    "Researcher",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "VP Investment Banking",
                    "Managing Director",
                    "Hedge Fund Manager",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Risk & Compliance Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Risk Management Frameworks",
                    "Regulatory Laws",
                    "Ethics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Operational Risk Modeling",
                    "KYC/AML Compliance",
                    "Internal Controls",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Risk Analyst",
                    "Compliance Associate",
                    "Legal Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Chief Risk Officer (CRO)",
                    "Compliance Director",
                    "Legal Head",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Civil Services / Government Exams",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "General Studies",
                    "History & Polity",
                    "Economics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Public Policy Analysis",
                    "Ethics & Integrity",
                    "Answer Writing Mastery",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Civil Servant",
                    "SDM/ASP",
                    "Departmental Officer",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Joint Secretary",
                    "Cabinet Secretary",
                    "Policy Advisor",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Public Sector Officer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Aptitude & Reasoning",
                    "General Awareness",
                    "Departmental Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Office Procedures",
                    "Budgeting",
                    "Personnel Management",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Probationary Officer",
                    "Executive Trainee",
                    "Section Officer",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "General Manager",
                    "Director (PSU)",
                    "Consultant",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "School / College Teacher",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Subject Specialization",
                    "B.Ed / NET Qualification",
                    "Child Psychology",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Curriculum Planning",
                    "Educational Technology",
                    "Student Mentorship",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Assistant Teacher",
                    "Lecturer",
                    "Tutor",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Principal",
                    "Professor",
                    "Dean of Education",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Policy / Research Assistant",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Qualitative Research",
                    "Social Sciences",
                    "Statistics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Data Cleaning (SPSS/Stata)",
                    "Report Writing",
                    "Field Surveys",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Research Assistant",
                    "Junior Fellow",
                    "Field Researcher",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Fellow",
                    "Policy Analyst",
                    "Think Tank Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Medical Doctor",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "MBBS Curriculum",
                    "Anatomy & Physiology",
                    "Pathology",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Clinical Rotations",
                    "Diagnosis Skills",
                    "Patient Communication",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "House Surgeon",
                    "Junior Resident",
                    "General Practitioner",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Specialist Surgeon",
                    "Consultant",
                    "Medical Director",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Dentist",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Dental Anatomy",
                    "Oral Pathology",
                    "Prosthodontics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Clinical Practice",
                    "Orthodontics Basics",
                    "Surgical Extractions",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Dentist",
                    "Resident",
                    "Clinical Associate",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "MDS Specialist",
                    "Maxillofacial Surgeon",
                    "Clinic Owner",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Pharmacist",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Organic Chemistry",
                    "Pharmacology",
                    "Drug Interactions",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Drug Formulation",
                    "Retail Pharmacy Management",
                    "Clinical Research",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Hospital Pharmacist",
                    "Medical Representative",
                    "Dispensing Chemist",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Clinical Pharmacist",
                    "Pharma Supply Head",
                    "Regulatory Affairs Manager",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Public Health Professional",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Epidemiology",
                    "Global Health",
                    "Biostatistics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Program Evaluation",
                    "Health Policy",
                    "Community Outreach",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Health Officer",
                    "Epidemiologist Intern",
                    "Program Coordinator",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "WHO Advisor",
                    "Health Program Director",
                    "Public Health Consultant",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Commercial Pilot",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Physics & Math",
                    "CPL Ground Classes",
                    "Navigation",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Flying Hours (200+)",
                    "Type Rating",
                    "Simulator Training",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "First Officer",
                    "Junior Pilot",
                    "Cadet",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Captain",
                    "Check Pilot",
                    "Flight Operations Head",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Lawyer / Advocate",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Constitutional Law",
                    "Torts & Contracts",
                    "Legal Drafting",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Moot Court",
                    "Litigation Practice",
                    "Legal Research (LexisNexis)",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Junior Associate",
                    "Legal Advisor",
                    "Litigator",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Advocate",
                    "Judge",
                    "General Counsel",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Chartered Engineer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Core Engineering (Mech/Civil/Elec)",
                    "Material Science",
                    "Math",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Project Planning",
                    "Quality Control (QC)",
                    "Safety Standards",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Site Engineer",
                    "Design Engineer",
                    "Quality Analyst",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Senior Consultant",
                    "Technical Director",
                    "Chartered Assessor",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Merchant Navy Officer",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Marine Engineering",
                    "Ship Navigation",
                    "Safety Drills",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Sea-time Hours",
                    "GMDSS Certification",
                    "Marine Tech Training",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Deck Cadet",
                    "3rd Officer",
                    "Junior Engineer",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Captain",
                    "Chief Engineer",
                    "Marine Superintendent",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Digital Marketing Specialist",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Marketing Basics",
                    "Consumer Psychology",
                    "Internet Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "PPC (Google Ads)",
                    "Social Media Marketing",
                    "Email Automation",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Executive",
                    "Campaign Trainee",
                    "Ads Coordinator",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Growth Manager",
                    "Marketing Director",
                    "Performance Lead",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "SEO / Growth Analyst",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Search Algorithms",
                    "HTML Basics",
                    "Keyword Research",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Backlink Strategy",
                    "Technical SEO",
                    "Conversion Rate Optimization (CRO)",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "SEO Analyst",
                    "Link Builder",
                    "Growth Executive",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Head of Growth",
                    "SEO Consultant",
                    "Digital Strategist",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Technical Content Creator",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Subject Expertise",
                    "Writing Skills",
                    "Video Production Basics",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Scriptwriting",
                    "SEO for Video/Blogs",
                    "Personal Branding",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Technical Writer",
                    "YouTube Creator",
                    "Blogger",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Thought Leader",
                    "Influencer",
                    "Media House Owner",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "No-Code / Automation Specialist",
        phases: &[
            RoadmapPhase {
                name: "Foundation",
                milestones: &[
                    "Logic & Workflows",
                    "API Concepts",
                    "Database Structures",
                ],
            },
            RoadmapPhase {
                name: "Skill Building",
                milestones: &[
                    "Zapier/Make",
                    "Webflow/Bubble",
                    "Airtable Integration",
                ],
            },
            RoadmapPhase {
                name: "Entry Level",
                milestones: &[
                    "Automation Specialist",
                    "No-code Developer",
                    "Tools Expert",
                ],
            },
            RoadmapPhase {
                name: "Growth",
                milestones: &[
                    "Solutions Architect",
                    "Process Consultant",
                    "CTO of No-code",
                ],
            },
        ],
    },
];

/// Domain-level roadmaps used when a career has no roadmap of its own.
pub static DOMAIN_ROADMAPS: &[RoadmapEntry] = &[
    RoadmapEntry {
        key: "Technology & Software",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Basic programming concepts",
                    "Computer fundamentals",
                    "Logical and analytical thinking",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Programming languages (Python / Java)",
                    "Databases and development tools",
                    "Version control and testing",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Junior Software Engineer",
                    "Data Analyst",
                    "QA / Test Engineer",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Senior Engineer",
                    "Product Manager (Tech)",
                    "System Architect / Specialist",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Business, Management & Operations",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Business fundamentals",
                    "Economics and accounting basics",
                    "Communication skills",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Business analytics",
                    "Process optimization",
                    "Stakeholder management",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Business Analyst",
                    "Operations Executive",
                    "Management Trainee",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Operations Manager",
                    "Management Consultant",
                    "Entrepreneur",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Design, Media & Digital Creative",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Design principles",
                    "Creativity and storytelling",
                    "Visual aesthetics",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Design tools (Figma, Adobe)",
                    "UX fundamentals",
                    "Content creation",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "UI/UX Designer",
                    "Graphic Designer",
                    "Content Strategist",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Design Lead",
                    "Creative Director",
                    "Digital Media Specialist",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Fashion, Architecture & Physical Design",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Design basics",
                    "Material knowledge",
                    "Sketching and visualization",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "CAD tools",
                    "Structural and aesthetic design",
                    "Industry standards",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Fashion Designer",
                    "Textile Designer",
                    "Junior Architect",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Senior Designer",
                    "Interior Designer",
                    "Architectural Consultant",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Finance, Accounting & Economics",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Accounting fundamentals",
                    "Mathematics and statistics",
                    "Economic principles",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Financial analysis",
                    "Taxation and compliance",
                    "Financial modeling",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Financial Analyst",
                    "Accounting Executive",
                    "Risk Analyst",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Chartered Accountant",
                    "Investment Banker",
                    "Finance Manager",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Government, Public Service & Education",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "General studies",
                    "Ethics and governance",
                    "Communication skills",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Policy analysis",
                    "Teaching methodologies",
                    "Research skills",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Government Exam Aspirant",
                    "Teaching Assistant",
                    "Policy Research Assistant",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Civil Services Officer",
                    "Senior Educator",
                    "Public Sector Leader",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Healthcare & Life Sciences",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Biology fundamentals",
                    "Human anatomy",
                    "Healthcare ethics",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Clinical knowledge",
                    "Laboratory practices",
                    "Healthcare regulations",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Medical Intern",
                    "Pharmacist",
                    "Public Health Associate",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Medical Doctor",
                    "Specialist",
                    "Healthcare Administrator",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Aviation, Law & Other Regulated Professions",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Domain-specific academics",
                    "Regulatory awareness",
                    "Professional ethics",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Professional certifications",
                    "Practical training",
                    "Compliance standards",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Commercial Pilot",
                    "Junior Advocate",
                    "Chartered Engineer",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Senior Pilot",
                    "Senior Lawyer",
                    "Industry Expert",
                ],
            },
        ],
    },
    RoadmapEntry {
        key: "Skilled & Emerging Careers",
        phases: &[
            RoadmapPhase {
                name: "Foundation Phase",
                milestones: &[
                    "Digital literacy",
                    "Basic technical skills",
                    "Online platforms understanding",
                ],
            },
            RoadmapPhase {
                name: "Skill Development Phase",
                milestones: &[
                    "Digital marketing",
                    "SEO and analytics",
                    "Automation tools",
                ],
            },
            RoadmapPhase {
                name: "Entry & Early Career Phase",
                milestones: &[
                    "Digital Marketing Specialist",
                    "SEO Analyst",
                    "Technical Content Creator",
                ],
            },
            RoadmapPhase {
                name: "Growth & Specialization Phase",
                milestones: &[
                    "Growth Strategist",
                    "No-Code Specialist",
                    "Independent Consultant",
                ],
            },
        ],
    },
];
