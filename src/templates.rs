//! Fixed text templates for the JNI header and its `Android.mk`.
//!
//! Held in [`JniTemplates`] and passed into the generator, so tests can
//! swap any of them out.

/// Per-module block, substituted once per native module.
pub const MODULE_SPEC_TEMPLATE: &str = "/**
 * JNI C++ class for module '::_CODEGEN_MODULE_NAME_::'
 */
class JSI_EXPORT ::_CODEGEN_MODULE_NAME_::SpecJSI : public JavaTurboModule {
public:
  ::_CODEGEN_MODULE_NAME_::SpecJSI(const JavaTurboModule::InitParams &params);
};
";

/// Outer header file: `::_MODULES_::` gets the joined module blocks.
pub const HEADER_TEMPLATE: &str = "
/**
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 *
 * @generated by codegen project: GenerateModuleJniH.js
 */

#pragma once

#include <ReactCommon/JavaTurboModule.h>
#include <ReactCommon/TurboModule.h>
#include <jsi/jsi.h>

namespace facebook {
namespace react {

::_MODULES_::

std::shared_ptr<TurboModule> ::_LIBRARY_NAME_::_ModuleProvider(const std::string moduleName, const JavaTurboModule::InitParams &params);

} // namespace react
} // namespace facebook
";

/// ndk-build descriptor. `::_LIBRARY_NAME_::` here receives the normalized
/// module identifier, not the raw library name.
pub const ANDROID_MK_TEMPLATE: &str = r#"# Copyright (c) Facebook, Inc. and its affiliates.
#
# This source code is licensed under the MIT license found in the
# LICENSE file in the root directory of this source tree.

LOCAL_PATH := $(call my-dir)

include $(CLEAR_VARS)

LOCAL_MODULE := ::_LIBRARY_NAME_::

LOCAL_C_INCLUDES := $(LOCAL_PATH)

LOCAL_SRC_FILES := $(wildcard $(LOCAL_PATH)/*.cpp)

LOCAL_EXPORT_C_INCLUDES := $(LOCAL_PATH)

LOCAL_SHARED_LIBRARIES := libreact_nativemodule_core

LOCAL_STATIC_LIBRARIES := libjsi

LOCAL_CFLAGS := \
  -DLOG_TAG=\"ReactNative\"

LOCAL_CFLAGS += -fexceptions -frtti -std=c++14 -Wall

include $(BUILD_SHARED_LIBRARY)
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JniTemplates<'t> {
    pub module: &'t str,
    pub header: &'t str,
    pub android_mk: &'t str,
}

impl Default for JniTemplates<'static> {
    fn default() -> Self {
        Self {
            module: MODULE_SPEC_TEMPLATE,
            header: HEADER_TEMPLATE,
            android_mk: ANDROID_MK_TEMPLATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Token;

    #[test]
    fn default_templates_carry_their_tokens() {
        let t = JniTemplates::default();
        let expected: [(&str, &[Token]); 3] = [
            (t.module, &[Token::MODULE_NAME]),
            (t.header, &[Token::MODULES, Token::LIBRARY_NAME]),
            (t.android_mk, &[Token::LIBRARY_NAME]),
        ];
        for (text, tokens) in expected {
            for tok in tokens {
                assert!(text.contains(tok.as_str()), "template is missing {tok}");
            }
        }
    }

    #[test]
    fn android_mk_keeps_escaped_cflags() {
        assert!(ANDROID_MK_TEMPLATE.contains("LOCAL_CFLAGS := \\\n  -DLOG_TAG=\\\"ReactNative\\\"\n"));
    }

    #[test]
    fn module_block_ends_with_newline() {
        assert!(MODULE_SPEC_TEMPLATE.ends_with("};\n"));
    }
}
