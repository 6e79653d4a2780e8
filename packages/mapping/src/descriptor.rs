//! Runtime descriptions of mappable types.
//!
//! A [`TypeDescriptor`] lists what the engine may touch on a type: fields,
//! accessor methods, setter methods and constructors. Members are registered
//! as typed closures through [`TypeDescriptor::builder`] and stored erased,
//! so the strategies can work on any instance through `&dyn Any`.
//!
//! ```rust
//! use jsonmap_mapping::{Field, Getter, Mappable, TypeDescriptor};
//!
//! #[derive(Default)]
//! struct Tenant {
//!     name: String,
//! }
//!
//! impl Mappable for Tenant {
//!     fn describe() -> TypeDescriptor {
//!         TypeDescriptor::builder::<Tenant>("Tenant")
//!             .marked()
//!             .field(Field::new("name", |t: &Tenant| t.name.clone(), |t, v| t.name = v))
//!             .getter(Getter::new("get_name", |t: &Tenant| t.name.clone()).property())
//!             .default_constructor(Tenant::default)
//!             .build()
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::marker::PhantomData;

use crate::dynamic::{Dynamic, MapValue};
use crate::types::ValueType;
use crate::Error;

/// A type the engine can map to and from documents.
///
/// `describe` is called afresh on every mapping call.
pub trait Mappable: Any + Sized {
    fn describe() -> TypeDescriptor;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

pub(crate) type ReadFn = Box<dyn Fn(&dyn Any) -> Result<Dynamic, Error>>;
pub(crate) type WriteFn = Box<dyn Fn(&mut dyn Any, Dynamic) -> Result<(), Error>>;
type BuildFn = Box<dyn Fn(Vec<Dynamic>) -> Result<Box<dyn Any>, Error>>;
type DefaultFn = Box<dyn Fn() -> Box<dyn Any>>;

/// Everything the engine knows about one type.
pub struct TypeDescriptor {
    name: &'static str,
    type_id: TypeId,
    marked: bool,
    fields: Vec<FieldDescriptor>,
    getters: Vec<GetterDescriptor>,
    setters: Vec<SetterDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
    default_constructor: Option<DefaultConstructor>,
}

impl TypeDescriptor {
    pub fn builder<T: Any>(name: &'static str) -> TypeDescriptorBuilder<T> {
        TypeDescriptorBuilder {
            descriptor: TypeDescriptor {
                name,
                type_id: TypeId::of::<T>(),
                marked: false,
                fields: Vec::new(),
                getters: Vec::new(),
                setters: Vec::new(),
                constructors: Vec::new(),
                default_constructor: None,
            },
            _type: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether the type opted in to mapping.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn getters(&self) -> &[GetterDescriptor] {
        &self.getters
    }

    pub fn setters(&self) -> &[SetterDescriptor] {
        &self.setters
    }

    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    pub fn default_constructor(&self) -> Option<&DefaultConstructor> {
        self.default_constructor.as_ref()
    }
}

/// Typed registration of a [`TypeDescriptor`] for `T`.
pub struct TypeDescriptorBuilder<T> {
    descriptor: TypeDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any> TypeDescriptorBuilder<T> {
    /// Opt the type in to mapping. Unmarked types are rejected by every strategy.
    pub fn marked(mut self) -> Self {
        self.descriptor.marked = true;
        self
    }

    pub fn field(mut self, field: Field<T>) -> Self {
        self.descriptor.fields.push(field.inner);
        self
    }

    pub fn getter(mut self, getter: Getter<T>) -> Self {
        self.descriptor.getters.push(getter.inner);
        self
    }

    pub fn setter(mut self, setter: Setter<T>) -> Self {
        self.descriptor.setters.push(setter.inner);
        self
    }

    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.descriptor.constructors.push(constructor.inner);
        self
    }

    /// Register a public zero-argument constructor.
    pub fn default_constructor<F>(self, construct: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.with_default_constructor(Visibility::Public, construct)
    }

    /// Register a zero-argument constructor that only forced access may call.
    pub fn private_default_constructor<F>(self, construct: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.with_default_constructor(Visibility::Private, construct)
    }

    fn with_default_constructor<F>(mut self, visibility: Visibility, construct: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.descriptor.default_constructor = Some(DefaultConstructor {
            visibility,
            build: Box::new(move || -> Box<dyn Any> { Box::new(construct()) }),
        });
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}

fn downcast_ref<T: Any>(instance: &dyn Any) -> Result<&T, Error> {
    instance
        .downcast_ref::<T>()
        .ok_or_else(|| Error::mismatch(std::any::type_name::<T>(), "instance of another type"))
}

fn downcast_mut<T: Any>(instance: &mut dyn Any) -> Result<&mut T, Error> {
    instance
        .downcast_mut::<T>()
        .ok_or_else(|| Error::mismatch(std::any::type_name::<T>(), "instance of another type"))
}

/// A declared field.
pub struct FieldDescriptor {
    name: &'static str,
    alias: Option<&'static str>,
    value_type: ValueType,
    visibility: Visibility,
    mutability: Mutability,
    synthetic: bool,
    pub(crate) read: ReadFn,
    pub(crate) write: Option<WriteFn>,
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Bookkeeping fields (links back to an owner and the like) are never mapped.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// Typed registration of a field of `T`.
pub struct Field<T> {
    inner: FieldDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any> Field<T> {
    pub fn new<V, G, S>(name: &'static str, get: G, set: S) -> Self
    where
        V: MapValue,
        G: Fn(&T) -> V + 'static,
        S: Fn(&mut T, V) + 'static,
    {
        let mut field = Field::read_only(name, get);
        field.inner.write = Some(Box::new(move |instance: &mut dyn Any, value: Dynamic| -> Result<(), Error> {
            let instance = downcast_mut::<T>(instance)?;
            set(instance, V::from_dynamic(value)?);
            Ok(())
        }));
        field
    }

    /// A field with no writer. It is skipped by every write, even a forced one.
    pub fn read_only<V, G>(name: &'static str, get: G) -> Self
    where
        V: MapValue,
        G: Fn(&T) -> V + 'static,
    {
        Field {
            inner: FieldDescriptor {
                name,
                alias: None,
                value_type: V::value_type(),
                visibility: Visibility::Public,
                mutability: Mutability::Mutable,
                synthetic: false,
                read: Box::new(move |instance: &dyn Any| -> Result<Dynamic, Error> {
                    Ok(get(downcast_ref::<T>(instance)?).into_dynamic())
                }),
                write: None,
            },
            _type: PhantomData,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.inner.alias = Some(alias);
        self
    }

    pub fn private(mut self) -> Self {
        self.inner.visibility = Visibility::Private;
        self
    }

    pub fn immutable(mut self) -> Self {
        self.inner.mutability = Mutability::Immutable;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.inner.synthetic = true;
        self
    }
}

/// A declared accessor method.
pub struct GetterDescriptor {
    method: &'static str,
    alias: Option<&'static str>,
    value_type: ValueType,
    pub(crate) read: ReadFn,
}

impl GetterDescriptor {
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// `Some("")` marks the accessor as mapped under its derived name.
    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }
}

/// Typed registration of an accessor method of `T`.
///
/// Only accessors carrying an alias (or [`Getter::property`]) are used.
pub struct Getter<T> {
    inner: GetterDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any> Getter<T> {
    pub fn new<V, G>(method: &'static str, get: G) -> Self
    where
        V: MapValue,
        G: Fn(&T) -> V + 'static,
    {
        Getter::try_new(method, move |instance: &T| Ok::<V, String>(get(instance)))
    }

    /// An accessor that may fail; the message is reported as an invocation error.
    pub fn try_new<V, G>(method: &'static str, get: G) -> Self
    where
        V: MapValue,
        G: Fn(&T) -> Result<V, String> + 'static,
    {
        Getter {
            inner: GetterDescriptor {
                method,
                alias: None,
                value_type: V::value_type(),
                read: Box::new(move |instance: &dyn Any| -> Result<Dynamic, Error> {
                    get(downcast_ref::<T>(instance)?)
                        .map(MapValue::into_dynamic)
                        .map_err(|message| Error::Invocation {
                            member: method.to_string(),
                            message,
                        })
                }),
            },
            _type: PhantomData,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.inner.alias = Some(alias);
        self
    }

    /// Map this accessor under the name derived from its method name.
    pub fn property(self) -> Self {
        self.alias("")
    }
}

/// A declared setter method.
pub struct SetterDescriptor {
    method: &'static str,
    alias: Option<&'static str>,
    value_type: ValueType,
    pub(crate) write: WriteFn,
}

impl SetterDescriptor {
    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }
}

/// Typed registration of a setter method of `T`.
pub struct Setter<T> {
    inner: SetterDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any> Setter<T> {
    pub fn new<V, S>(method: &'static str, set: S) -> Self
    where
        V: MapValue,
        S: Fn(&mut T, V) + 'static,
    {
        Setter::try_new(method, move |instance: &mut T, value: V| {
            set(instance, value);
            Ok(())
        })
    }

    /// A setter that may reject its input.
    pub fn try_new<V, S>(method: &'static str, set: S) -> Self
    where
        V: MapValue,
        S: Fn(&mut T, V) -> Result<(), String> + 'static,
    {
        Setter {
            inner: SetterDescriptor {
                method,
                alias: None,
                value_type: V::value_type(),
                write: Box::new(move |instance: &mut dyn Any, value: Dynamic| -> Result<(), Error> {
                    let instance = downcast_mut::<T>(instance)?;
                    set(instance, V::from_dynamic(value)?).map_err(|message| Error::Invocation {
                        member: method.to_string(),
                        message,
                    })
                }),
            },
            _type: PhantomData,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.inner.alias = Some(alias);
        self
    }
}

/// A constructor parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    value_type: ValueType,
    alias: Option<&'static str>,
}

impl Param {
    pub fn of<V: MapValue>() -> Self {
        Param {
            value_type: V::value_type(),
            alias: None,
        }
    }

    /// The document key bound to this parameter.
    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn alias_name(&self) -> Option<&'static str> {
        self.alias
    }
}

/// Constructor arguments, consumed in parameter order.
pub struct Arguments {
    values: std::vec::IntoIter<Dynamic>,
}

impl Arguments {
    /// Bind the next argument to `V`.
    pub fn take<V: MapValue>(&mut self) -> Result<V, Error> {
        V::from_dynamic(self.values.next().unwrap_or(Dynamic::Null))
    }
}

/// A declared constructor.
pub struct ConstructorDescriptor {
    params: Vec<Param>,
    visibility: Visibility,
    build: BuildFn,
}

impl ConstructorDescriptor {
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn construct(&self, args: Vec<Dynamic>) -> Result<Box<dyn Any>, Error> {
        (self.build)(args)
    }
}

/// Typed registration of a constructor of `T`.
pub struct Constructor<T> {
    inner: ConstructorDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any> Constructor<T> {
    pub fn new<P, F>(params: P, build: F) -> Self
    where
        P: IntoIterator<Item = Param>,
        F: Fn(&mut Arguments) -> Result<T, Error> + 'static,
    {
        Constructor {
            inner: ConstructorDescriptor {
                params: params.into_iter().collect(),
                visibility: Visibility::Public,
                build: Box::new(move |values: Vec<Dynamic>| -> Result<Box<dyn Any>, Error> {
                    let mut args = Arguments {
                        values: values.into_iter(),
                    };
                    Ok(Box::new(build(&mut args)?) as Box<dyn Any>)
                }),
            },
            _type: PhantomData,
        }
    }

    pub fn private(mut self) -> Self {
        self.inner.visibility = Visibility::Private;
        self
    }
}

/// A zero-argument constructor.
pub struct DefaultConstructor {
    visibility: Visibility,
    build: DefaultFn,
}

impl DefaultConstructor {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn construct(&self) -> Box<dyn Any> {
        (self.build)()
    }
}
