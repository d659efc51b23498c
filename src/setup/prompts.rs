//! Every user-visible message the wizard prints or asks.

use crate::monitors::SettingKind;

pub const PROJECT_ERROR: &str = "The setup command must run inside a crawler project.";
pub const ENABLED: &str = "Monitoring was enabled successfully!";
pub const ALREADY_ENABLED: &str = "Monitoring was already configured on this project!\n\
    Proceed to the settings.cfg file for further configuration.";
pub const MONITOR_RESPONSE: &str = "Thanks for enabling the crawler monitor suite!";
pub const SETTING_ERROR: &str = "Invalid input value! Do you want to input a new value?";

pub const VALIDATION_ENABLE: &str = "Do you want to enable item validation?";
pub const VALIDATION_RESPONSE: &str = "Item validation enabled successfully!";
pub const NO_SCHEMAS: &str = "There are no available item validation schemas!";
pub const NO_ITEMS_ADDED: &str = "No items added for validation.";
pub const INVALID_BACKEND: &str = "The informed validation backend isn't valid! \
    Select one from the list.\nDo you want to try again?";
pub const SCHEMA_LIST_ERROR: &str =
    "Invalid item schema! Do you want to try a new schema from the list?";
pub const SCHEMA_LIST_CONFIRM: &str = "Do you want to enable any more item schemas?";

pub fn enable_monitor(name: &str) -> String {
    format!("Enable the {name} monitor?")
}

pub fn setting_already_setup(name: &str) -> String {
    format!(
        "A configuration for the {name} monitor already exists.\n\
         Proceed to the settings.cfg file for further configuration."
    )
}

pub fn setting_question(kind: SettingKind, description: &str) -> String {
    match kind {
        SettingKind::LimitLeast => {
            format!("What is the fewest amount of {description} expected?")
        }
        // The dict question asks for the shared numeric value; the companion
        // key list is asked with the list question afterwards.
        SettingKind::LimitMost | SettingKind::Dict => {
            format!("What is the greatest amount of {description} expected?")
        }
        SettingKind::List => {
            format!("Which {description} do you want to track? (separated by comma)")
        }
    }
}

pub fn backend_question(rendered_list: &str) -> String {
    format!(
        "Select a validation backend from the list below:\n{rendered_list}\n\
         Which validation backend do you want to use? (use the number related)"
    )
}

pub fn schema_question(rendered_list: &str) -> String {
    format!(
        "These are the available item schemas in your project:\n{rendered_list}\n\
         Which item do you want to enable validation for? (use the number related)"
    )
}

pub fn module_error(plugin: &str) -> String {
    format!("You need to install the {plugin} plugin to use this feature.")
}
