//! Shared helpers under `utils/`: logger, error type, response envelope and
//! async handler wrapper.

use std::path::{Path, PathBuf};

use cname_core::GeneratedFile;

/// winston logger writing to the console and `logs/`.
pub struct LoggerJs;

impl GeneratedFile for LoggerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("logger.js")
    }

    fn render(&self) -> String {
        r#"const { createLogger, format, transports } = require("winston");
const { combine, timestamp, printf, colorize } = format;

const consoleFormat = combine(
  colorize(),
  timestamp({ format: "YYYY-MM-DD HH:mm:ss" }),
  printf(({ level, message, timestamp }) => {
    return `${timestamp} [${level}] : ${message}`;
  })
);

const fileFormat = combine(
  timestamp({ format: "YYYY-MM-DD HH:mm:ss" }),
  printf(({ level, message, timestamp }) => {
    return `${timestamp} [${level}] : ${message}`;
  })
);

const logger = createLogger({
  level: "info",
  transports: [
    new transports.Console({ format: consoleFormat }),
    new transports.File({ filename: "logs/app.log", format: fileFormat }),
    new transports.File({ filename: "logs/error.log", level: "error", format: fileFormat }),
  ],
});

module.exports = logger;
"#
        .to_string()
    }
}

/// Operational error carrying an HTTP status. `isExpected` marks messages
/// that are safe to show in production.
pub struct ApiErrorJs;

impl GeneratedFile for ApiErrorJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("apiError.js")
    }

    fn render(&self) -> String {
        r#"class ApiError extends Error {
  constructor(message, statusCode) {
    super(message);
    this.statusCode = statusCode;
    this.status = `${statusCode}`.startsWith("4") ? "fail" : "error";
    this.isExpected = true;
  }
}

module.exports = ApiError;
"#
        .to_string()
    }
}

pub struct SendResponseJs;

impl GeneratedFile for SendResponseJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("sendResponse.js")
    }

    fn render(&self) -> String {
        r#"/**
 * Standardized response sender
 * @param {Response} res - Express response object
 * @param {number} statusCode - HTTP status code
 * @param {string} status - "success" | "fail" | "error"
 * @param {string} message - Response message
 * @param {object} data - Response data
 */
module.exports = (res, statusCode, status, message, data = {}) => {
  res.status(statusCode).json({
    status,
    message,
    data,
    timestamp: new Date().toISOString(),
  });
};
"#
        .to_string()
    }
}

pub struct AsyncErrorHandlerJs;

impl GeneratedFile for AsyncErrorHandlerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("asyncErrorHandler.js")
    }

    fn render(&self) -> String {
        r#"/**
 * Async error handler wrapper
 * Catches errors in async route handlers and passes them to error middleware
 */
module.exports = (fn) => async (req, res, next) => {
  try {
    await fn(req, res, next);
  } catch (err) {
    next(err);
  }
};
"#
        .to_string()
    }
}
