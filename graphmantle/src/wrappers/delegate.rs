// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! The delegation base shared by all wrapper families
//!
//! A wrapper holds a base element and forwards every property operation
//! to it with zero semantic change, so any backend element can stand in
//! wherever the abstract contract is required. `delegate_element!`
//! generates that forwarding for a wrapper with a `base` field, together
//! with the wrapping invariants:
//! - identity: the wrapper's id is the base element's id
//! - equality/hash: defined over the base id, so wrapped and unwrapped
//!   views of the same underlying element compare equal
//! - string form: the base element's own representation
//!
//! Traversal is deliberately NOT forwarded here. Each wrapper family
//! re-wraps traversal results in its own type, keeping the policy
//! boundary closed: an unwrapped base element must never escape through
//! a traversal call.

/// Implement `Element`, `Display`, `PartialEq`, `Eq`, and `Hash` for a
/// wrapper type by forwarding to its `base` field.
macro_rules! delegate_element {
    ($wrapper:ty) => {
        impl crate::core::element::Element for $wrapper {
            fn id(&self) -> crate::core::element::ElementId {
                self.base.id()
            }

            fn property(
                &self,
                key: &str,
            ) -> crate::error::GraphResult<Option<crate::core::value::Value>> {
                self.base.property(key)
            }

            fn set_property(
                &self,
                key: &str,
                value: crate::core::value::Value,
            ) -> crate::error::GraphResult<()> {
                self.base.set_property(key, value)
            }

            fn remove_property(
                &self,
                key: &str,
            ) -> crate::error::GraphResult<Option<crate::core::value::Value>> {
                self.base.remove_property(key)
            }

            fn property_keys(
                &self,
            ) -> crate::error::GraphResult<std::collections::HashSet<String>> {
                self.base.property_keys()
            }
        }

        impl std::fmt::Display for $wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.base)
            }
        }

        impl std::fmt::Debug for $wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.base)
            }
        }

        impl PartialEq for $wrapper {
            fn eq(&self, other: &Self) -> bool {
                crate::core::element::elements_equal(self, other)
            }
        }

        impl Eq for $wrapper {}

        impl std::hash::Hash for $wrapper {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                use crate::core::element::Element;
                self.id().hash(state);
            }
        }
    };
}

pub(crate) use delegate_element;
