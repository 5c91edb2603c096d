//! Item-type allow-list for type-scoped endpoints.
//!
//! GLPI addresses resources by type name (`Ticket`, `Computer`, ...). Every
//! type-scoped operation validates its type name against this registry
//! before building a request, so typos fail locally instead of producing an
//! opaque 400 from the server. The registry is owned per client instance and
//! can be extended at runtime for plugin-defined types.

use std::collections::HashSet;

/// Baseline GLPI item types, matching the types exposed by a stock
/// installation. Plugin types are added through
/// [`ItemTypeRegistry::add`].
pub const BASE_ITEM_TYPES: &[&str] = &[
    // Assets
    "Computer",
    "Monitor",
    "NetworkEquipment",
    "Peripheral",
    "Phone",
    "Printer",
    "Software",
    "SoftwareLicense",
    "SoftwareVersion",
    "SoftwareUpdate",
    "Rack",
    "Enclosure",
    "PDU",
    "Cartridge",
    "CartridgeItem",
    "Consumable",
    "ConsumableItem",
    "Line",
    "SimCard",
    // ITIL objects
    "Ticket",
    "TicketTask",
    "TicketValidation",
    "TicketCost",
    "TicketFollowup",
    "TicketRecurrent",
    "Problem",
    "ProblemTask",
    "Change",
    "ChangeTask",
    "ChangeValidation",
    "ITILFollowup",
    "ITILSolution",
    "Log",
    "Document",
    "Document_Item",
    "Project",
    "ProjectTask",
    "ProjectCost",
    "Reminder",
    "RSSFeed",
    "KnowbaseItem",
    "KnowbaseItemCategory",
    // Administration
    "User",
    "Group",
    "Group_User",
    "Entity",
    "Profile",
    "Profile_User",
    "Rule",
    "RuleAction",
    "RuleCriteria",
    "SavedSearch",
    "Notification",
    "NotificationTemplate",
    "Alert",
    "AuthLDAP",
    "AuthMail",
    "Calendar",
    "Holiday",
    "MailCollector",
    "SLA",
    "SLM",
    "OLA",
    "FieldUnicity",
    "Fieldblacklist",
    // Management
    "Budget",
    "Supplier",
    "Contact",
    "Contract",
    "ContractCost",
    "Infocom",
    "Certificate",
    "Datacenter",
    "DCRoom",
    "Domain",
    "Appliance",
    "Cluster",
    // Dropdowns
    "Location",
    "Manufacturer",
    "ITILCategory",
    "TaskCategory",
    "TaskTemplate",
    "SolutionType",
    "SolutionTemplate",
    "RequestType",
    "State",
    "Blacklist",
    "DocumentCategory",
    "DocumentType",
    "BusinessCriticity",
    "KnowbaseItemTranslation",
    "OperatingSystem",
    "OperatingSystemVersion",
    "OperatingSystemServicePack",
    "OperatingSystemArchitecture",
    "OperatingSystemKernel",
    "OperatingSystemKernelVersion",
    "OperatingSystemEdition",
    "ComputerModel",
    "ComputerType",
    "MonitorModel",
    "MonitorType",
    "NetworkEquipmentModel",
    "NetworkEquipmentType",
    "PeripheralModel",
    "PeripheralType",
    "PhoneModel",
    "PhoneType",
    "PhonePowerSupply",
    "PrinterModel",
    "PrinterType",
    "SoftwareCategory",
    "UserCategory",
    "UserTitle",
    "InterfaceType",
    "Filesystem",
    "VirtualMachineState",
    "VirtualMachineSystem",
    "VirtualMachineType",
    // Device components
    "DeviceBattery",
    "DeviceCase",
    "DeviceControl",
    "DeviceDrive",
    "DeviceFirmware",
    "DeviceGeneric",
    "DeviceGraphicCard",
    "DeviceHardDrive",
    "DeviceMemory",
    "DeviceMotherboard",
    "DeviceNetworkCard",
    "DevicePci",
    "DevicePowerSupply",
    "DeviceProcessor",
    "DeviceSensor",
    "DeviceSimcard",
    "DeviceSoundCard",
    // Network
    "NetworkPort",
    "NetworkName",
    "NetworkAlias",
    "IPAddress",
    "IPNetwork",
    "FQDN",
    "Vlan",
    "WifiNetwork",
    "Netpoint",
];

/// Mutable allow-list of item types, owned by a client instance.
///
/// Membership is a case-sensitive exact match; no normalization is applied.
#[derive(Debug, Clone)]
pub struct ItemTypeRegistry {
    types: HashSet<String>,
}

impl ItemTypeRegistry {
    /// Creates a registry seeded with [`BASE_ITEM_TYPES`].
    pub fn new() -> Self {
        ItemTypeRegistry {
            types: BASE_ITEM_TYPES.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Returns true if `name` is a registered item type.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains(name)
    }

    /// Registers one or more custom item types.
    pub fn add<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.types.insert(name.into());
        }
    }
}

impl Default for ItemTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
