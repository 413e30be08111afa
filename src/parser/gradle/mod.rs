//! Brace-balanced block extraction for Gradle build scripts.
//!
//! Build scripts are Groovy/Kotlin code, not structured data, so blocks are
//! lifted out verbatim by counting braces instead of parsing.

mod scope;

pub use scope::{
    compile_dependency_scopes, extract_scope, remove_scope, ScopeSpan, DEPENDENCIES_SCOPE,
    PRODUCT_FLAVORS_SCOPE, REPOSITORIES_SCOPE,
};
