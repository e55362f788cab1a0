//! Report object types and field catalogs for boot entries and OS profiles.

use fieldrep::{DataType, Field, FieldType, ObjectTag, ObjectType, Result, SortValue};

use crate::model::{BootEntry, BootParams, OsProfile};

pub const BR_ENTRY: ObjectTag = ObjectTag::new(1);
pub const BR_PROFILE: ObjectTag = ObjectTag::new(2);
pub const BR_PARAMS: ObjectTag = ObjectTag::new(4);

/// One report row: a boot entry, its profile, or both.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootReportObj<'a> {
    pub entry: Option<&'a BootEntry>,
    pub profile: Option<&'a OsProfile>,
}

impl<'a> BootReportObj<'a> {
    pub fn new(entry: Option<&'a BootEntry>, profile: Option<&'a OsProfile>) -> Self {
        BootReportObj { entry, profile }
    }
}

/// Data handed to render functions.
#[derive(Debug, Clone, Copy)]
pub enum BootData<'a> {
    Entry(&'a BootEntry),
    Profile(&'a OsProfile),
    Params(&'a BootParams),
}

fn entry_data<'a>(obj: &BootReportObj<'a>) -> Option<BootData<'a>> {
    obj.entry.map(BootData::Entry)
}

fn profile_data<'a>(obj: &BootReportObj<'a>) -> Option<BootData<'a>> {
    obj.profile.map(BootData::Profile)
}

fn params_data<'a>(obj: &BootReportObj<'a>) -> Option<BootData<'a>> {
    obj.entry.map(|be| BootData::Params(&be.params))
}

/// The three object types a boot report row can carry.
pub fn object_types<'a>() -> Result<Vec<ObjectType<BootReportObj<'a>, BootData<'a>>>> {
    Ok(vec![
        ObjectType::new(BR_ENTRY, "Boot loader entries", "entry_", entry_data)?,
        ObjectType::new(BR_PROFILE, "OS profiles", "profile_", profile_data)?,
        ObjectType::new(BR_PARAMS, "Boot parameters", "param_", params_data)?,
    ])
}

macro_rules! render {
    ($name:ident, $kind:ident, $report:ident, |$v:ident| $value:expr) => {
        fn $name(f: &mut Field, d: &BootData<'_>) {
            if let BootData::$kind($v) = d {
                f.$report($value)
            }
        }
    };
}

render!(profile_osid, Profile, report_sha, |p| p.os_id.as_str());
render!(profile_name, Profile, report_str, |p| p.name.as_str());
render!(profile_short_name, Profile, report_str, |p| p.short_name.as_str());
render!(profile_version, Profile, report_str, |p| p.version.as_str());
render!(profile_version_id, Profile, report_str, |p| p.version_id.as_str());
render!(profile_uname, Profile, report_str, |p| p.uname_pattern.as_str());
render!(profile_kernel, Profile, report_str, |p| p.kernel_pattern.as_str());
render!(profile_initrd, Profile, report_str, |p| p.initramfs_pattern.as_str());
render!(profile_lvm2, Profile, report_str, |p| p.root_opts_lvm2.as_str());
render!(profile_btrfs, Profile, report_str, |p| p.root_opts_btrfs.as_str());
render!(profile_options, Profile, report_str, |p| p.options.as_str());

render!(entry_bootid, Entry, report_sha, |be| be.boot_id.as_str());
render!(entry_title, Entry, report_str, |be| be.title.as_str());
render!(entry_options, Entry, report_str, |be| be.options.as_str());
render!(entry_kernel, Entry, report_str, |be| be.linux.as_str());
render!(entry_initramfs, Entry, report_str, |be| be.initrd.as_str());
render!(entry_machineid, Entry, report_sha, |be| be.machine_id.as_str());

render!(params_version, Params, report_str, |bp| bp.version.as_str());
render!(params_rootdev, Params, report_str, |bp| bp.root_device.as_str());
render!(params_rootlv, Params, report_str, |bp| bp.lvm_root_lv.as_deref().unwrap_or(""));
render!(params_subvolpath, Params, report_str, |bp| bp.btrfs_subvol_path.as_deref().unwrap_or(""));

// Entries without a subvolume show an empty cell
fn params_subvolid(f: &mut Field, d: &BootData<'_>) {
    if let BootData::Params(bp) = d {
        match bp.btrfs_subvol_id {
            Some(id) => f.report_num(id),
            None => f.set_value("", SortValue::Str(String::new())),
        }
    }
}

/// Fields drawn from OS profiles.
///
/// The profile's kernel options template is named `osoptions` so it can
/// share a catalog with the entry's own `options`.
pub fn profile_fields<'a>() -> Vec<FieldType<BootData<'a>>> {
    vec![
        FieldType::new(BR_PROFILE, "osid", "OsID", "OS identifier", 7, DataType::Sha, profile_osid),
        FieldType::new(BR_PROFILE, "osname", "Name", "OS name", 24, DataType::Str, profile_name),
        FieldType::new(
            BR_PROFILE,
            "osshortname",
            "OsShortName",
            "OS short name",
            12,
            DataType::Str,
            profile_short_name,
        ),
        FieldType::new(BR_PROFILE, "osversion", "OsVersion", "OS version", 10, DataType::Str, profile_version),
        FieldType::new(
            BR_PROFILE,
            "osversion_id",
            "VersionID",
            "Version identifier",
            10,
            DataType::Str,
            profile_version_id,
        ),
        FieldType::new(
            BR_PROFILE,
            "unamepattern",
            "UnamePattern",
            "UTS name pattern",
            12,
            DataType::Str,
            profile_uname,
        ),
        FieldType::new(
            BR_PROFILE,
            "kernelpattern",
            "KernPattern",
            "Kernel image pattern",
            13,
            DataType::Str,
            profile_kernel,
        ),
        FieldType::new(
            BR_PROFILE,
            "initrdpattern",
            "InitrdPattern",
            "Initrd pattern",
            13,
            DataType::Str,
            profile_initrd,
        ),
        FieldType::new(BR_PROFILE, "lvm2opts", "LVM2Opts", "LVM2 options", 12, DataType::Str, profile_lvm2),
        FieldType::new(BR_PROFILE, "btrfsopts", "BTRFSOpts", "BTRFS options", 13, DataType::Str, profile_btrfs),
        FieldType::new(BR_PROFILE, "osoptions", "Options", "Kernel options", 24, DataType::Str, profile_options),
    ]
}

/// Fields drawn from boot entries.
pub fn entry_fields<'a>() -> Vec<FieldType<BootData<'a>>> {
    vec![
        FieldType::new(BR_ENTRY, "bootid", "BootID", "Boot identifier", 7, DataType::Sha, entry_bootid),
        FieldType::new(BR_ENTRY, "title", "Title", "Entry title", 24, DataType::Str, entry_title),
        FieldType::new(BR_ENTRY, "options", "Options", "Kernel options", 24, DataType::Str, entry_options),
        FieldType::new(BR_ENTRY, "kernel", "Kernel", "Kernel image", 32, DataType::Str, entry_kernel),
        FieldType::new(
            BR_ENTRY,
            "initramfs",
            "Initramfs",
            "Initramfs image",
            40,
            DataType::Str,
            entry_initramfs,
        ),
        FieldType::new(
            BR_ENTRY,
            "machineid",
            "Machine ID",
            "Machine identifier",
            12,
            DataType::Sha,
            entry_machineid,
        ),
    ]
}

/// Fields drawn from an entry's boot parameters.
pub fn params_fields<'a>() -> Vec<FieldType<BootData<'a>>> {
    vec![
        FieldType::new(BR_PARAMS, "version", "Version", "Kernel version", 24, DataType::Str, params_version),
        FieldType::new(BR_PARAMS, "rootdev", "RootDevice", "Root device", 10, DataType::Str, params_rootdev),
        FieldType::new(BR_PARAMS, "rootlv", "RootLV", "Root logical volume", 6, DataType::Str, params_rootlv),
        FieldType::new(
            BR_PARAMS,
            "subvolpath",
            "SubvolPath",
            "BTRFS subvolume path",
            10,
            DataType::Str,
            params_subvolpath,
        ),
        FieldType::new(BR_PARAMS, "subvolid", "SubvolID", "BTRFS subvolume ID", 8, DataType::Num, params_subvolid),
    ]
}

/// The catalog of the entry report: entry, profile and parameter fields.
pub fn entry_report_fields<'a>() -> Vec<FieldType<BootData<'a>>> {
    let mut fields = entry_fields();
    fields.extend(profile_fields());
    fields.extend(params_fields());
    fields
}
