//! MSTest template - C# test class with an in-memory database per test

use serde::Serialize;
use tinytemplate::TinyTemplate;

use super::Template;
use crate::generating::TestUnit;
use crate::language::RenderingError;

static METHOD: &'static str = r#"        [TestMethod]
        public async Task {name}()
        \{
            // Arrange
            var db = BuildDb(nameof({name}));
{{ for line in arrange }}            {line}
{{ endfor }}
            // TODO: Setup service dependencies and mocks
            // var service = BuildService(db);

            // Act & Assert
{{ for line in expect }}            {line}
{{ endfor }}
            // TODO: Verify database changes if any
        }"#;

static DOCUMENT: &'static str = r#"using System;
using System.Collections.Generic;
using System.Linq;
using System.Net;
using System.Security.Claims;
using System.Threading.Tasks;
using ApiApplication.Data;
using ApiApplication.Entities;
using ApiApplication.Enums;
using ApiApplication.Exceptions;
using ApiApplication.Services;
using Microsoft.AspNetCore.Http;
using Microsoft.AspNetCore.Identity;
using Microsoft.EntityFrameworkCore;
using Microsoft.Extensions.Logging;
using Microsoft.VisualStudio.TestTools.UnitTesting;
using Moq;

namespace {namespace}
\{
    [TestClass]
    public class {class}
    \{
        private static {database} BuildDb(string name)
        \{
            var opts = new DbContextOptionsBuilder<{database}>()
                .UseInMemoryDatabase(name)
                .Options;
            return new {database}(opts);
        }

{body}
    }
}
"#;

/// Renders test units as MSTest methods on a single test class. Each method
/// gets its own in-memory database context named after the method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsTest {
    pub namespace: String,
    pub class: String,
    pub database: String,
}

impl Default for MsTest {
    fn default() -> Self {
        MsTest {
            namespace: "Tests".to_string(),
            class: "GeneratedFunctionTests".to_string(),
            database: "ApplicationDbContext".to_string(),
        }
    }
}

#[derive(Serialize)]
struct Context<'a> {
    namespace: &'a str,
    class: &'a str,
    database: &'a str,
    body: String,
}

fn compile(name: &'static str, text: &'static str) -> Result<TinyTemplate<'static>, RenderingError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(name, text)
        .map_err(|error| RenderingError {
            template: name,
            details: error.to_string(),
        })?;
    Ok(tt)
}

fn render<C: Serialize>(
    name: &'static str,
    text: &'static str,
    context: &C,
) -> Result<String, RenderingError> {
    compile(name, text)?
        .render(name, context)
        .map_err(|error| RenderingError {
            template: name,
            details: error.to_string(),
        })
}

impl Template for MsTest {
    fn method(&self, unit: &TestUnit) -> Result<String, RenderingError> {
        render("method", METHOD, unit)
    }

    fn document(&self, methods: &[String]) -> Result<String, RenderingError> {
        let context = Context {
            namespace: &self.namespace,
            class: &self.class,
            database: &self.database,
            body: methods.join("\n\n"),
        };

        render("document", DOCUMENT, &context)
    }
}
