//! Built-in feature-first FastAPI project layout.
//!
//! Shared plumbing lives under `app/`, and each feature gets its own
//! package under `app/modules/`. The `punch` feature ships with working
//! code; `user` is an empty package skeleton.

use super::{Node, Template};

const MAIN_PY: &str = r#"from fastapi import FastAPI
from app.core.config import settings

app = FastAPI(title=settings.PROJECT_NAME)

# Include feature routers here
from app.modules.punch.router import router as punch_router
app.include_router(punch_router, prefix="/punch", tags=["Punch"])
"#;

const DATABASE_PY: &str = r#"from sqlalchemy import create_engine
from sqlalchemy.ext.declarative import declarative_base
from sqlalchemy.orm import sessionmaker

SQLALCHEMY_DATABASE_URL = "sqlite:///./test.db"
engine = create_engine(SQLALCHEMY_DATABASE_URL, connect_args={"check_same_thread": False})
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)
Base = declarative_base()
"#;

const CORE_CONFIG_PY: &str = r#"from pydantic import BaseSettings

class Settings(BaseSettings):
    PROJECT_NAME: str = "FastAPI Feature-First App"

    class Config:
        env_file = ".env"

settings = Settings()
"#;

const SHARED_DEPENDENCIES_PY: &str = r#"from app.database import SessionLocal
from fastapi import Depends

def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const PUNCH_MODELS_PY: &str = r#"from sqlalchemy import Column, Integer, DateTime
from app.database import Base
from datetime import datetime

class Punch(Base):
    __tablename__ = "punches"

    id = Column(Integer, primary_key=True, index=True)
    employee_id = Column(Integer, index=True)
    punch_in_time = Column(DateTime, default=datetime.utcnow)
    punch_out_time = Column(DateTime, nullable=True)
"#;

const PUNCH_SCHEMAS_PY: &str = r#"from pydantic import BaseModel
from datetime import datetime
from typing import Optional

class PunchBase(BaseModel):
    employee_id: int
    punch_in_time: datetime

class PunchCreate(PunchBase):
    punch_out_time: Optional[datetime] = None

class PunchOut(PunchCreate):
    punch_in_time: datetime

    class Config:
        orm_mode = True
"#;

const PUNCH_ROUTER_PY: &str = r#"from fastapi import APIRouter, Depends
from sqlalchemy.orm import Session
from app.shared.dependencies import get_db
from app.modules.punch import models, schemas
from app.modules.punch.models import Punch

router = APIRouter()

@router.post("/", response_model=schemas.PunchOut)
def punch_in_out(punch: schemas.PunchCreate, db: Session = Depends(get_db)):
    db_punch = models.Punch(employee_id=punch.employee_id, punch_in_time=punch.punch_in_time, punch_out_time=punch.punch_out_time)
    db.add(db_punch)
    db.commit()
    db.refresh(db_punch)
    return db_punch
"#;

/// Sub-packages of the `user` feature and the empty modules in each.
const USER_PACKAGES: [(&str, &[&str]); 8] = [
    ("models", &["user.py", "address.py", "profile.py"]),
    ("schemas", &["user.py", "address.py"]),
    ("crud", &["user.py"]),
    ("services", &["user_service.py"]),
    ("routes", &["user_routes.py"]),
    ("utils", &["helpers.py"]),
    ("auth", &["auth.py"]),
    ("config", &["settings.py"]),
];

/// A Python package: `__init__.py` followed by the given entries.
fn package<I: IntoIterator<Item = (&'static str, Node)>>(entries: I) -> Node {
    Node::directory(std::iter::once(("__init__.py", Node::file(""))).chain(entries))
}

fn user_feature() -> Node {
    package(USER_PACKAGES.iter().map(|(name, modules)| {
        (*name, package(modules.iter().map(|module| (*module, Node::file("")))))
    }))
}

fn punch_feature() -> Node {
    package([
        ("models.py", Node::file(PUNCH_MODELS_PY)),
        ("schemas.py", Node::file(PUNCH_SCHEMAS_PY)),
        ("router.py", Node::file(PUNCH_ROUTER_PY)),
    ])
}

/// Builds the built-in template.
pub fn template() -> Template {
    let app = package([
        ("main.py", Node::file(MAIN_PY)),
        ("database.py", Node::file(DATABASE_PY)),
        ("core", package([("config.py", Node::file(CORE_CONFIG_PY))])),
        ("shared", package([("dependencies.py", Node::file(SHARED_DEPENDENCIES_PY))])),
        ("modules", package([("punch", punch_feature()), ("user", user_feature())])),
    ]);

    Template::from_iter([("app", app)])
}
