use std::collections::BTreeMap;

use log::{info, warn};

use crate::{
    error::FilterError,
    gauss_blur::GaussBlur,
    map::PropertyMap,
    signature::{parse_signature, ArgSpec},
};

/// A function creating the outputs of a plugin function from its arguments.
pub type CreateFn = fn(&PropertyMap) -> Result<PropertyMap, FilterError>;

/// Identification of a plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    /// Globally unique reverse domain identifier.
    pub identifier: String,
    /// Namespace the functions are exposed under.
    pub namespace: String,
    /// Human readable description.
    pub description: String,
    /// Host API version the plugin was written against, as (major, minor).
    pub api_version: (u16, u16),
    /// Whether registrations are rejected once initialization is done.
    pub read_only: bool,
}

/// A function registered on a plugin.
#[derive(Clone)]
pub struct PluginFunction {
    /// The function name.
    pub name: String,
    /// The raw argument signature.
    pub signature: String,
    /// The parsed arguments.
    pub args: Vec<ArgSpec>,
    create: CreateFn,
}

impl std::fmt::Debug for PluginFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PluginFunction")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl PluginFunction {
    /// Check `args` against the declared arguments.
    ///
    /// Every required argument must be present, every present argument must
    /// be declared and have the declared kind.
    pub fn validate(&self, args: &PropertyMap) -> Result<(), FilterError> {
        for spec in self.args.iter() {
            match args.get(&spec.name) {
                None if spec.optional => {}
                None => return Err(FilterError::MissingArgument(spec.name.clone())),
                Some(value) if value.kind() != spec.kind => {
                    return Err(FilterError::WrongArgumentType {
                        key: spec.name.clone(),
                        expected: spec.kind,
                        found: value.kind(),
                    })
                }
                Some(_) => {}
            }
        }

        if let Some(key) = args.keys().find(|k| !self.args.iter().any(|a| a.name == *k)) {
            return Err(FilterError::UnknownArgument(
                self.name.clone(),
                key.to_string(),
            ));
        }

        Ok(())
    }
}

/// A plugin: its identification plus a registry of functions.
#[derive(Debug)]
pub struct Plugin {
    config: PluginConfig,
    functions: BTreeMap<String, PluginFunction>,
    sealed: bool,
}

impl Plugin {
    /// Create a plugin without any function.
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            functions: BTreeMap::new(),
            sealed: false,
        }
    }

    /// Get the plugin identification.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Register a function under `name` with the argument signature `signature`.
    ///
    /// # Errors
    ///
    /// Fails if the plugin is sealed, the name is taken or the signature is invalid.
    pub fn register(
        &mut self,
        name: &str,
        signature: &str,
        create: CreateFn,
    ) -> Result<(), FilterError> {
        if self.sealed {
            return Err(FilterError::ReadOnlyPlugin(self.config.identifier.clone()));
        }

        if self.functions.contains_key(name) {
            return Err(FilterError::DuplicateFunction(name.to_string()));
        }

        let args = parse_signature(signature)?;
        self.functions.insert(
            name.to_string(),
            PluginFunction {
                name: name.to_string(),
                signature: signature.to_string(),
                args,
                create,
            },
        );

        info!(
            "{}.{} registered with signature '{}'",
            self.config.namespace, name, signature
        );

        Ok(())
    }

    /// Finish initialization; a read-only plugin rejects further registrations.
    pub fn seal(&mut self) {
        self.sealed = self.config.read_only;
    }

    /// Get a registered function by name.
    pub fn function(&self, name: &str) -> Option<&PluginFunction> {
        self.functions.get(name)
    }

    /// Iterate over the registered functions in name order.
    pub fn functions(&self) -> impl Iterator<Item = &PluginFunction> {
        self.functions.values()
    }

    /// Call function `name` with `args`.
    ///
    /// The arguments are validated against the function signature before the
    /// function runs, so a rejected call has no effect.
    pub fn invoke(&self, name: &str, args: &PropertyMap) -> Result<PropertyMap, FilterError> {
        let function = self
            .function(name)
            .ok_or_else(|| FilterError::FunctionNotFound(name.to_string()))?;

        function
            .validate(args)
            .and_then(|_| (function.create)(args))
            .map_err(|e| {
                warn!("{}.{}: {}", self.config.namespace, name, e);
                e
            })
    }
}

/// Build the plugin exposing `GaussBlur`.
///
/// # Examples
///
/// ```
/// use vsgauss_plugin::plugin_init;
///
/// let plugin = plugin_init().unwrap();
///
/// assert_eq!(plugin.config().namespace, "testc");
/// assert_eq!(plugin.function("GaussBlur").unwrap().signature, "clip:clip;");
/// ```
pub fn plugin_init() -> Result<Plugin, FilterError> {
    let mut plugin = Plugin::new(PluginConfig {
        identifier: "com.debug.gauss".to_string(),
        namespace: "testc".to_string(),
        description: "3x3 gaussian blur for floating point clips".to_string(),
        api_version: (3, 6),
        read_only: true,
    });

    plugin.register(GaussBlur::NAME, GaussBlur::SIGNATURE, GaussBlur::create)?;
    plugin.seal();

    Ok(plugin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Property;

    fn echo(args: &PropertyMap) -> Result<PropertyMap, FilterError> {
        Ok(args.clone())
    }

    fn test_plugin(read_only: bool) -> Plugin {
        Plugin::new(PluginConfig {
            identifier: "com.example.test".to_string(),
            namespace: "test".to_string(),
            description: "test plugin".to_string(),
            api_version: (3, 6),
            read_only,
        })
    }

    #[test]
    fn plugin_register_and_invoke() -> Result<(), FilterError> {
        let mut plugin = test_plugin(false);
        plugin.register("Echo", "value:int;label:data:opt;", echo)?;

        let mut args = PropertyMap::new();
        args.set("value", Property::Int(3));

        let out = plugin.invoke("Echo", &args)?;
        assert_eq!(out.get_int("value")?, 3);
        assert_eq!(plugin.functions().count(), 1);
        Ok(())
    }

    #[test]
    fn plugin_rejects_registrations() -> Result<(), FilterError> {
        let mut plugin = test_plugin(true);
        plugin.register("Echo", "value:int;", echo)?;

        assert!(matches!(
            plugin.register("Echo", "value:int;", echo),
            Err(FilterError::DuplicateFunction(_))
        ));
        assert!(matches!(
            plugin.register("Broken", "value:integer;", echo),
            Err(FilterError::InvalidSignature(..))
        ));

        plugin.seal();
        assert!(matches!(
            plugin.register("Other", "value:int;", echo),
            Err(FilterError::ReadOnlyPlugin(_))
        ));
        Ok(())
    }

    #[test]
    fn plugin_seal_keeps_writable_plugins_open() -> Result<(), FilterError> {
        let mut plugin = test_plugin(false);
        plugin.seal();
        plugin.register("Echo", "value:int;", echo)?;
        Ok(())
    }

    #[test]
    fn plugin_validates_arguments() -> Result<(), FilterError> {
        let mut plugin = test_plugin(false);
        plugin.register("Echo", "value:int;label:data:opt;", echo)?;

        let args = PropertyMap::new();
        assert!(matches!(
            plugin.invoke("Echo", &args),
            Err(FilterError::MissingArgument(key)) if key == "value"
        ));

        let mut args = PropertyMap::new();
        args.set("value", Property::Float(3.0));
        assert!(matches!(
            plugin.invoke("Echo", &args),
            Err(FilterError::WrongArgumentType { .. })
        ));

        let mut args = PropertyMap::new();
        args.set("value", Property::Int(3));
        args.set("extra", Property::Int(4));
        assert!(matches!(
            plugin.invoke("Echo", &args),
            Err(FilterError::UnknownArgument(function, key))
                if function == "Echo" && key == "extra"
        ));

        assert!(matches!(
            plugin.invoke("Missing", &args),
            Err(FilterError::FunctionNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn plugin_init_registers_gauss_blur() -> Result<(), FilterError> {
        let plugin = plugin_init()?;
        assert_eq!(plugin.config().identifier, "com.debug.gauss");

        let function = plugin
            .function("GaussBlur")
            .ok_or_else(|| FilterError::FunctionNotFound("GaussBlur".to_string()))?;
        assert_eq!(function.args.len(), 1);
        assert_eq!(function.args[0].name, "clip");
        Ok(())
    }
}
