//! Canonical skill dictionary.
//!
//! Aliases are lower-case. Some alias lists deliberately reach into related
//! technologies (React also answers to "react native" and "react hooks"), so a
//! React Native résumé yields both React and React Native. Likewise "js" is a
//! JavaScript alias and `.` is a token boundary, so "Node.js" or "React.js"
//! also yield JavaScript. That looseness is part of the taxonomy, not an
//! extraction bug.

use super::{SkillCategory, SkillDefinition};

use super::SkillCategory::*;

const fn skill(
    canonical: &'static str,
    category: SkillCategory,
    aliases: &'static [&'static str],
) -> SkillDefinition {
    SkillDefinition {
        canonical,
        category,
        aliases,
    }
}

pub static SKILL_TAXONOMY: &[SkillDefinition] = &[
    // Programming languages
    skill("JavaScript", ProgrammingLanguages, &["javascript", "js", "es6", "ecmascript"]),
    skill("TypeScript", ProgrammingLanguages, &["typescript", "ts"]),
    skill("Python", ProgrammingLanguages, &["python", "python3", "py"]),
    skill("Java", ProgrammingLanguages, &["java", "jdk", "j2ee"]),
    skill("C++", ProgrammingLanguages, &["c++", "cpp"]),
    skill("C#", ProgrammingLanguages, &["c#", "csharp", "c sharp"]),
    skill("C", ProgrammingLanguages, &["c programming", "c language", "ansi c", "embedded c"]),
    skill("Go", ProgrammingLanguages, &["golang", "go lang", "go language"]),
    skill("Rust", ProgrammingLanguages, &["rust", "rustlang"]),
    skill("Ruby", ProgrammingLanguages, &["ruby"]),
    skill("PHP", ProgrammingLanguages, &["php"]),
    skill("Kotlin", ProgrammingLanguages, &["kotlin"]),
    skill("Swift", ProgrammingLanguages, &["swift", "swiftui"]),
    skill("Scala", ProgrammingLanguages, &["scala"]),
    skill("R", ProgrammingLanguages, &["r programming", "r language", "rstudio"]),
    // Frontend frameworks
    skill(
        "React",
        FrontendFrameworks,
        &["react", "reactjs", "react.js", "react native", "react hooks"],
    ),
    skill("Angular", FrontendFrameworks, &["angular", "angularjs", "angular.js"]),
    skill("Vue.js", FrontendFrameworks, &["vue", "vuejs", "vue.js", "nuxt", "nuxt.js"]),
    skill("Next.js", FrontendFrameworks, &["next.js", "nextjs"]),
    skill("Svelte", FrontendFrameworks, &["svelte", "sveltekit"]),
    skill("HTML", FrontendFrameworks, &["html", "html5"]),
    skill("CSS", FrontendFrameworks, &["css", "css3", "scss", "sass"]),
    skill("Tailwind CSS", FrontendFrameworks, &["tailwind", "tailwindcss", "tailwind css"]),
    skill("Redux", FrontendFrameworks, &["redux", "redux toolkit"]),
    skill("jQuery", FrontendFrameworks, &["jquery"]),
    // Backend frameworks
    skill("Node.js", BackendFrameworks, &["node.js", "nodejs", "node js", "node"]),
    skill("Express", BackendFrameworks, &["express", "express.js", "expressjs"]),
    skill("NestJS", BackendFrameworks, &["nestjs", "nest.js"]),
    skill("Django", BackendFrameworks, &["django", "django rest framework"]),
    skill("Flask", BackendFrameworks, &["flask"]),
    skill("FastAPI", BackendFrameworks, &["fastapi", "fast api"]),
    skill("Spring Boot", BackendFrameworks, &["spring boot", "springboot", "spring"]),
    skill("ASP.NET", BackendFrameworks, &["asp.net", ".net", ".net core", "dotnet"]),
    skill("Ruby on Rails", BackendFrameworks, &["ruby on rails", "rails"]),
    skill("Laravel", BackendFrameworks, &["laravel"]),
    skill("GraphQL", BackendFrameworks, &["graphql", "apollo server"]),
    // Databases
    skill("MongoDB", Databases, &["mongodb", "mongo", "mongoose"]),
    skill("PostgreSQL", Databases, &["postgresql", "postgres", "psql"]),
    skill("MySQL", Databases, &["mysql", "mariadb"]),
    skill("Redis", Databases, &["redis"]),
    skill("SQLite", Databases, &["sqlite", "sqlite3"]),
    skill("Oracle", Databases, &["oracle db", "oracle database", "pl/sql"]),
    skill("SQL Server", Databases, &["sql server", "mssql", "t-sql"]),
    skill("DynamoDB", Databases, &["dynamodb", "dynamo db"]),
    skill("Cassandra", Databases, &["cassandra"]),
    skill("Elasticsearch", Databases, &["elasticsearch", "elastic search"]),
    skill("Firebase", Databases, &["firebase", "firestore"]),
    // Cloud platforms
    skill("AWS", CloudPlatforms, &["aws", "amazon web services", "ec2", "s3", "aws lambda"]),
    skill("Azure", CloudPlatforms, &["azure", "microsoft azure"]),
    skill("GCP", CloudPlatforms, &["gcp", "google cloud", "google cloud platform"]),
    skill("Heroku", CloudPlatforms, &["heroku"]),
    skill("DigitalOcean", CloudPlatforms, &["digitalocean", "digital ocean"]),
    skill("Vercel", CloudPlatforms, &["vercel"]),
    skill("Netlify", CloudPlatforms, &["netlify"]),
    // DevOps tools
    skill("Docker", DevopsTools, &["docker", "dockerfile", "docker compose"]),
    skill("Kubernetes", DevopsTools, &["kubernetes", "k8s"]),
    skill("Jenkins", DevopsTools, &["jenkins"]),
    skill("Terraform", DevopsTools, &["terraform"]),
    skill("Ansible", DevopsTools, &["ansible"]),
    skill("Git", DevopsTools, &["git", "github", "gitlab", "bitbucket"]),
    skill(
        "CI/CD",
        DevopsTools,
        &["ci/cd", "cicd", "github actions", "gitlab ci", "circleci"],
    ),
    skill("Linux", DevopsTools, &["linux", "ubuntu", "centos", "bash scripting"]),
    skill("Nginx", DevopsTools, &["nginx"]),
    // Mobile
    skill("React Native", Mobile, &["react native", "react-native"]),
    skill("Flutter", Mobile, &["flutter", "dart"]),
    skill("Android", Mobile, &["android", "android sdk", "jetpack compose"]),
    skill("iOS", Mobile, &["ios", "iphone", "xcode"]),
    skill("Xamarin", Mobile, &["xamarin"]),
    skill("Ionic", Mobile, &["ionic"]),
    // Data & AI
    skill("Machine Learning", DataAi, &["machine learning", "ml"]),
    skill("Deep Learning", DataAi, &["deep learning", "neural networks"]),
    skill("TensorFlow", DataAi, &["tensorflow", "keras"]),
    skill("PyTorch", DataAi, &["pytorch", "torch"]),
    skill("Pandas", DataAi, &["pandas"]),
    skill("NumPy", DataAi, &["numpy"]),
    skill("Scikit-learn", DataAi, &["scikit-learn", "sklearn", "scikit learn"]),
    skill("NLP", DataAi, &["nlp", "natural language processing"]),
    skill("Computer Vision", DataAi, &["computer vision", "opencv"]),
    skill("Data Analysis", DataAi, &["data analysis", "data analytics"]),
    skill("Spark", DataAi, &["apache spark", "spark", "pyspark"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_names_unique() {
        let mut seen = HashSet::new();
        for definition in SKILL_TAXONOMY {
            assert!(
                seen.insert(definition.canonical.to_lowercase()),
                "duplicate canonical skill {}",
                definition.canonical
            );
        }
    }

    #[test]
    fn test_aliases_are_lowercase_and_trimmed() {
        for definition in SKILL_TAXONOMY {
            assert!(!definition.aliases.is_empty(), "{} has no aliases", definition.canonical);
            for alias in definition.aliases {
                assert_eq!(*alias, alias.trim().to_lowercase(), "bad alias {alias:?}");
                assert!(!alias.is_empty());
            }
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in SkillCategory::ALL {
            assert!(
                SKILL_TAXONOMY.iter().any(|d| d.category == category),
                "{category:?} has no skills"
            );
        }
    }
}
