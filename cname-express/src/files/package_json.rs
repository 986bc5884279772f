//! package.json generator for Express projects.

use std::path::{Path, PathBuf};

use cname_core::GeneratedFile;

const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_DESCRIPTION: &str = "Express.js API project";

/// The package.json manifest.
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
}

impl PackageJson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            dependencies: vec![
                Dependency::new("chalk", "^4.1.2"),
                Dependency::new("cookie-parser", "^1.4.6"),
                Dependency::new("dotenv", "^16.3.1"),
                Dependency::new("express", "^4.18.2"),
                Dependency::new("express-validator", "^7.3.1"),
                Dependency::new("winston", "^3.11.0"),
                Dependency::new("mongoose", "^9.1.5"),
            ],
            dev_dependencies: vec![Dependency::new("nodemon", "^3.0.2")],
        }
    }

    fn render_dependencies(deps: &[Dependency]) -> String {
        deps.iter()
            .map(|d| format!("    \"{}\": \"{}\"", d.name, d.version))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn render(&self) -> String {
        let name = serde_json::Value::from(self.name.as_str());
        let dependencies = Self::render_dependencies(&self.dependencies);
        let dev_dependencies = Self::render_dependencies(&self.dev_dependencies);

        format!(
            r#"{{
  "name": {},
  "version": "{}",
  "description": "{}",
  "main": "server.js",
  "scripts": {{
    "start": "node server.js",
    "dev": "nodemon server.js"
  }},
  "keywords": [
    "express",
    "api",
    "nodejs"
  ],
  "author": "",
  "license": "ISC",
  "dependencies": {{
{}
  }},
  "devDependencies": {{
{}
  }}
}}
"#,
            name, self.version, self.description, dependencies, dev_dependencies
        )
    }
}

/// A dependency with name and version.
#[derive(Debug, Clone)]
pub struct Dependency {
    name: String,
    version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
