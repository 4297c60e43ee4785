use core::fmt;

use crate::Reflect;
use crate::ops::ReflectRef;
use crate::ops::{Array, List, Pointer, Struct};

// -----------------------------------------------------------------------------
// Struct

#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.member_len() != y.member_len() {
        return Some(false);
    }

    for (name, y_member) in y.iter_members() {
        let Some(x_member) = x.member(name) else {
            return Some(false);
        };
        let result = x_member.reflect_partial_eq(y_member);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, member) in dyn_struct.iter_members() {
        debug.field(name, &member as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// List

#[inline(never)]
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (x_value, y_value) in x.iter().zip(y.iter()) {
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Array

#[inline(never)]
pub fn array_partial_eq(x: &dyn Array, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Array(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (item, y_item) in x.iter().zip(y.iter()) {
        let result = item.reflect_partial_eq(y_item);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

#[inline(never)]
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Pointer

#[inline(never)]
pub fn pointer_partial_eq(x: &dyn Pointer, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Pointer(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.target(), y.target()) {
        (Some(x_target), Some(y_target)) => x_target.reflect_partial_eq(y_target),
        (None, None) => Some(true),
        _ => Some(false),
    }
}

#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.target() {
        Some(target) => fmt::Debug::fmt(target, f),
        None => f.write_str("null"),
    }
}
