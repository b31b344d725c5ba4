//! Naming of object instances in generated code.
//!
//! The host compiler decides how a selected object is spelled in the
//! generated source; extension handlers only ask for the spelling.

use evgen_types::ObjectRef;

pub trait ObjectResolver {
    /// Expression for the current instance of `obj`.
    fn instance(&self, obj: ObjectRef) -> String;

    /// Expression for the list of all selected instances of `obj`.
    fn instance_list(&self, obj: ObjectRef) -> String;
}

/// Names objects by their object-info handle: `obj_4`, `obj_4_list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleNames;

impl ObjectResolver for HandleNames {
    fn instance(&self, obj: ObjectRef) -> String {
        format!("obj_{}", obj.handle)
    }

    fn instance_list(&self, obj: ObjectRef) -> String {
        format!("obj_{}_list", obj.handle)
    }
}
