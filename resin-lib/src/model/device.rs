//! Device records

use serde::Deserialize;
use serde::Serialize;

/// The fields of a device record inspected by the SDK.
///
/// Other fields of the API record are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Numeric device id.
    pub id: Option<u64>,
    /// Device uuid.
    pub uuid: Option<String>,
    /// Human readable device name.
    pub device_name: Option<String>,
    /// Whether the device is currently online, if reported.
    pub is_online: Option<bool>,
    /// Version of the supervisor running on the device.
    pub supervisor_version: Option<String>,
    /// Timestamp of the last connect/disconnect event.
    pub last_connectivity_event: Option<String>,
    /// Host OS version string.
    pub os_version: Option<String>,
}

impl Device {
    /// Returns `true` once the device has run a supervisor and reported in.
    pub fn is_provisioned(&self) -> bool {
        is_present(&self.supervisor_version) && is_present(&self.last_connectivity_event)
    }
}

/// Returns `true` if both the supervisor version and the last connectivity
/// event are present and non-empty.
pub fn is_provisioned(device: &Device) -> bool {
    device.is_provisioned()
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn device(supervisor_version: Option<&str>, last_connectivity_event: Option<&str>) -> Device {
        Device {
            supervisor_version: supervisor_version.map(str::to_string),
            last_connectivity_event: last_connectivity_event.map(str::to_string),
            ..Device::default()
        }
    }

    #[test]
    fn test_provisioned() {
        assert!(is_provisioned(&device(Some("1.0"), Some("t"))));
    }

    #[test]
    fn test_not_provisioned() {
        assert!(!is_provisioned(&device(None, Some("t"))));
        assert!(!is_provisioned(&device(Some("1.0"), None)));
        assert!(!is_provisioned(&device(Some(""), Some("t"))));
        assert!(!is_provisioned(&device(Some("1.0"), Some(""))));
        assert!(!is_provisioned(&Device::default()));
    }

    #[test]
    fn test_deserialize_api_record() {
        let device: Device = serde_json::from_value(json!({
            "id": 1234,
            "uuid": "7cf02a687b74206f92cb455969cf8e98",
            "device_name": "sparkling-wood",
            "is_online": true,
            "supervisor_version": "6.3.5",
            "last_connectivity_event": "2017-06-02T10:21:42.010Z",
            "os_version": "Resin OS 2.0.6+rev3",
            "note": null,
            "belongs_to__application": { "__id": 5 }
        }))
        .unwrap();

        assert_eq!(device.id, Some(1234));
        assert_eq!(device.is_online, Some(true));
        assert!(device.is_provisioned());
    }

    #[test]
    fn test_deserialize_null_fields() {
        let device: Device = serde_json::from_value(json!({
            "uuid": "abc",
            "is_online": null,
            "supervisor_version": null,
            "last_connectivity_event": null
        }))
        .unwrap();

        assert_eq!(device.is_online, None);
        assert!(!device.is_provisioned());
    }
}
