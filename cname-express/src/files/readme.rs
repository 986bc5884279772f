//! README.md generator.

use std::path::{Path, PathBuf};

use cname_core::GeneratedFile;

pub struct Readme {
    pub project: String,
}

impl Readme {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("README.md")
    }

    fn render(&self) -> String {
        let project = &self.project;

        format!(
            r#"# {project}

Express.js API project generated with cname.

## Getting Started

### Install dependencies
```bash
npm install
```

### Configure environment variables
Edit the `.env` file with your configuration.

### Run the server
```bash
# Development mode with nodemon
npm run dev

# Production mode
npm start
```

## Project Structure

```
{project}/
├── controllers/      # Route controllers
├── services/         # Business logic
├── routes/           # API routes
├── validators/       # Request validation
├── middlewares/      # Custom middlewares
├── utils/            # Utility functions
├── config/           # Configuration files
├── logs/             # Application logs
├── app.js            # Express app setup
├── server.js         # Server entry point
└── .env              # Environment variables
```

## Generate Resources

Use the CLI to generate new resources:

```bash
cname g resource user
```

This will create:
- Controller with CRUD operations
- Service layer
- Routes with validation
- Validator middleware

The route is registered in `app.js` automatically.

## Available Scripts

- `npm start` - Start the server
- `npm run dev` - Start with nodemon (auto-reload)

## Features

- Global error handling
- Request logging with Winston
- Environment-based configuration
- Standardized API responses
- Async error handling
- Health check endpoint

## API Endpoints

### Health Check
`GET /health` - Check if server is running

### Add your routes here
Routes that could not be registered automatically go in `app.js`:

```javascript
app.use('/api/users', require('./routes/user.routes'));
```

## License

ISC
"#
        )
    }
}
