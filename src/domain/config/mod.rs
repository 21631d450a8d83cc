// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration domain

pub mod document;
pub mod keys;
pub mod resolver;
pub mod validator;
pub mod value;

pub use self::document::{BaseDocument, DocumentFormat};
pub use self::keys::ConfigKey;
pub use self::resolver::{
    env_overrides, parse_overrides, resolve, ConfigResolver, Override, ResolvedConfig,
    ResolvedEntry, ValueSource,
};
pub use self::validator::ConfigValidator;
pub use self::value::ConfigValue;
