pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stage {
    pub icon: &'static str,
    pub stage: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Technology {
    pub icon: &'static str,
    pub name: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "globe-icon",
        title: "Custom Web Development",
        description: "Tailored websites that perfectly match your brand and goals",
    },
    Service {
        icon: "cart-icon",
        title: "E-commerce Solutions",
        description: "Powerful online stores with seamless shopping experiences",
    },
    Service {
        icon: "code-icon",
        title: "API Development",
        description: "Robust and scalable APIs for your business needs",
    },
    Service {
        icon: "palette-icon",
        title: "UI/UX Design",
        description: "Beautiful and intuitive user interfaces that convert",
    },
    Service {
        icon: "link-icon",
        title: "Mulesoft Integration",
        description: "Enterprise-grade API integration and management solutions",
    },
    Service {
        icon: "cloud-icon",
        title: "Salesforce Solutions",
        description: "Custom Salesforce development and integration services",
    },
];

pub const STAGES: [Stage; 4] = [
    Stage {
        icon: "search-icon",
        stage: "1. Discovery",
        title: "Requirements Analysis",
        description: "We deeply analyze your needs and objectives to create a comprehensive project roadmap.",
    },
    Stage {
        icon: "palette-icon",
        stage: "2. Design",
        title: "UI/UX Design",
        description: "Creating intuitive interfaces and user flows that align with your brand identity.",
    },
    Stage {
        icon: "cpu-icon",
        stage: "3. Development",
        title: "Agile Development",
        description: "Building your solution using cutting-edge technologies and best practices.",
    },
    Stage {
        icon: "rocket-icon",
        stage: "4. Deployment",
        title: "Launch & Support",
        description: "Rigorous testing, seamless deployment, and ongoing maintenance support.",
    },
];

pub const TECHNOLOGIES: [Technology; 6] = [
    Technology { icon: "code-icon", name: "React" },
    Technology { icon: "database-icon", name: "PostgreSQL" },
    Technology { icon: "globe-icon", name: "FastAPI" },
    Technology { icon: "palette-icon", name: "Tailwind CSS" },
    Technology { icon: "link-icon", name: "Mulesoft" },
    Technology { icon: "cloud-icon", name: "Salesforce" },
];
