//! app.js entry point generator.

use std::path::{Path, PathBuf};

use cname_core::GeneratedFile;

/// Marker after which route imports are inserted.
pub const IMPORT_MARKER: &str = "//import routes here";

/// Marker after which route registrations are inserted.
pub const ROUTE_MARKER: &str = "// TODO: Add your routes here";

/// Registration of the 404 handler; routes must be registered before it.
pub const NOT_FOUND_HANDLER: &str = "app.use(handleNotFound);";

/// The Express application setup file.
pub struct AppJs;

impl GeneratedFile for AppJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("app.js")
    }

    fn render(&self) -> String {
        format!(
            r#"require('dotenv').config();
const express = require('express');
const cookieParser = require('cookie-parser');
const {{ globalError, handleNotFound }} = require('./middlewares/globalErrorHandler');
{IMPORT_MARKER}

const app = express();

// Middlewares
app.use(cookieParser());
app.use(express.json());

app.use('/health', (req, res) => {{
  res.status(200).send('OK');
}});

{ROUTE_MARKER}

{NOT_FOUND_HANDLER}
app.use(globalError);

module.exports = app;
"#
        )
    }
}

/// The HTTP server bootstrap.
pub struct ServerJs;

impl GeneratedFile for ServerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("server.js")
    }

    fn render(&self) -> String {
        r#"const app = require('./app');
const chalk = require('chalk');
const logger = require('./utils/logger');

const PORT = process.env.PORT || 3000;

app.listen(PORT, '0.0.0.0', () => {
  console.log(chalk.bgCyan.white.bold(`  Server is running on port ${PORT}  `));
  logger.info(`Server started on port ${PORT}`);
});
"#
        .to_string()
    }
}
